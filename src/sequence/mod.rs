//! Replay-capable asynchronous sequences
//!
//! # Overview
//!
//! A [`Sequence`] is the result of every client operation. A producer task
//! appends values to an in-memory event log and finishes it with exactly one
//! terminal event: completion or an error. Any number of [`Observer`]s read
//! the log, each with its own cursor starting at the first event, so an
//! observer attaching late still sees the full history.
//!
//! The log is unbounded and the producer never waits for observers. Use
//! [`Sequence::cancel`] or a deadline to stop background work nobody reads.

mod handle;
mod log;
mod observer;

pub use handle::{Emitter, Sequence};
pub use observer::{Observer, SequenceStream};
