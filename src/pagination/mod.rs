//! Pagination module
//!
//! # Overview
//!
//! Paged endpoints return a [`Page`] envelope and accept a `start` offset.
//! The [`Paginator`] turns such an endpoint into a [`Sequence`] of pages:
//!
//! 1. request `start=0`
//! 2. decode the page and emit it
//! 3. if the page is not the last, request `start=nextPageStart`, taken
//!    verbatim from the page just decoded, and repeat
//!
//! Only one request per sequence is outstanding at any time, so pages are
//! emitted in fetch order. Any failure ends the sequence; pages emitted
//! before it stay readable.
//!
//! [`Sequence`]: crate::sequence::Sequence

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Page, PaginationConfig, DEFAULT_MAX_PAGES};
