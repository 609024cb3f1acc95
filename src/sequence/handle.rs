//! Sequence handle and its producer side

use super::log::EventLog;
use super::observer::{Observer, SequenceStream};
use crate::error::{Error, Result};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

struct Shared<T> {
    log: Arc<EventLog<T>>,
    task: OnceLock<AbortHandle>,
}

/// Producer side of a sequence
///
/// Values emitted after the sequence terminated (for example after
/// [`Sequence::cancel`]) are dropped; `emit` reports this by returning false.
///
/// An emitter from [`Sequence::channel`] that is dropped without calling
/// [`complete`](Self::complete) or [`fail`](Self::fail) ends the sequence
/// with [`Error::Abandoned`].
pub struct Emitter<T> {
    log: Arc<EventLog<T>>,
    armed: bool,
}

impl<T> Emitter<T> {
    fn armed(log: Arc<EventLog<T>>) -> Self {
        Self { log, armed: true }
    }

    /// An emitter whose drop leaves termination to its owner
    fn unarmed(log: Arc<EventLog<T>>) -> Self {
        Self { log, armed: false }
    }

    /// Append a value; returns false if the sequence already terminated
    pub fn emit(&self, item: T) -> bool {
        self.log.push(item)
    }

    /// Finish the sequence successfully
    pub fn complete(mut self) -> bool {
        self.armed = false;
        self.log.complete()
    }

    /// Finish the sequence with an error
    pub fn fail(mut self, error: Error) -> bool {
        self.armed = false;
        self.log.fail(error)
    }

    /// Whether the sequence already terminated
    pub fn is_terminated(&self) -> bool {
        self.log.is_terminated()
    }
}

impl<T> Drop for Emitter<T> {
    fn drop(&mut self) {
        if self.armed && self.log.fail(Error::Abandoned) {
            debug!("Sequence producer dropped before finishing");
        }
    }
}

/// An ordered, replayable, asynchronously produced sequence of values
///
/// Cloning yields another handle to the same sequence.
pub struct Sequence<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Sequence<T> {
    fn from_log(log: Arc<EventLog<T>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                log,
                task: OnceLock::new(),
            }),
        }
    }

    /// A sequence driven by hand through the returned emitter
    pub fn channel() -> (Emitter<T>, Self) {
        let log = Arc::new(EventLog::new());
        let emitter = Emitter::armed(Arc::clone(&log));
        (emitter, Self::from_log(log))
    }

    /// A sequence that already failed
    pub fn failed(error: Error) -> Self {
        let (emitter, sequence) = Self::channel();
        emitter.fail(error);
        sequence
    }

    /// Whether a terminal event has been recorded
    pub fn is_terminated(&self) -> bool {
        self.shared.log.is_terminated()
    }

    /// Number of values emitted so far
    pub fn len(&self) -> usize {
        self.shared.log.len()
    }

    /// Whether no value has been emitted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stop the producer and end the sequence with [`Error::Cancelled`]
    ///
    /// Returns false if the sequence had already terminated; values emitted
    /// before cancellation stay readable.
    pub fn cancel(&self) -> bool {
        if let Some(task) = self.shared.task.get() {
            task.abort();
        }
        let cancelled = self.shared.log.fail(Error::Cancelled);
        if cancelled {
            debug!("Sequence cancelled");
        }
        cancelled
    }
}

impl<T: Send + 'static> Sequence<T> {
    /// Run `producer` on the tokio runtime and record its outcome
    ///
    /// `Ok(())` completes the sequence, `Err` fails it. Must be called from
    /// within a tokio runtime.
    pub fn spawn<F, Fut>(producer: F) -> Self
    where
        F: FnOnce(Emitter<T>) -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self::spawn_with_deadline(None, producer)
    }

    /// Like [`spawn`](Self::spawn), failing with [`Error::Timeout`] if the
    /// producer has not finished within `deadline`
    ///
    /// The producer's outcome is recorded by a guard owned by the spawned
    /// task, so a task dropped by a shutting-down runtime still terminates
    /// the sequence with [`Error::Abandoned`].
    pub fn spawn_with_deadline<F, Fut>(deadline: Option<Duration>, producer: F) -> Self
    where
        F: FnOnce(Emitter<T>) -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let (outcome_guard, sequence) = Self::channel();
        let work = producer(Emitter::unarmed(Arc::clone(&sequence.shared.log)));

        let handle = tokio::spawn(async move {
            let bounded = async move {
                match deadline {
                    Some(limit) => tokio::time::timeout(limit, work).await.unwrap_or_else(|_| {
                        Err(Error::Timeout {
                            timeout_ms: limit.as_millis() as u64,
                        })
                    }),
                    None => work.await,
                }
            };

            let outcome = AssertUnwindSafe(bounded)
                .catch_unwind()
                .await
                .unwrap_or(Err(Error::Panicked));

            match outcome {
                Ok(()) => {
                    outcome_guard.complete();
                }
                Err(e) => {
                    if outcome_guard.fail(e.clone()) {
                        debug!("Sequence failed: {e}");
                    }
                }
            }
        });

        let _ = sequence.shared.task.set(handle.abort_handle());
        sequence
    }

    /// A sequence of the single value `future` resolves to
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self::spawn(|emitter| async move {
            let value = future.await?;
            emitter.emit(value);
            Ok::<(), Error>(())
        })
    }
}

impl<T: Clone> Sequence<T> {
    /// A new observer positioned at the first event
    pub fn observe(&self) -> Observer<T> {
        Observer::new(Arc::clone(&self.shared.log))
    }

    /// A new observer as a `futures::Stream`
    pub fn stream(&self) -> SequenceStream<T>
    where
        T: Send + 'static,
    {
        self.observe().into_stream()
    }

    /// The first value, or [`Error::Empty`] if the sequence completed without one
    pub async fn first(&self) -> Result<T> {
        self.observe().next().await.unwrap_or(Err(Error::Empty))
    }

    /// Wait for the terminal event and return every value in emission order
    pub async fn collect(&self) -> Result<Vec<T>> {
        let mut observer = self.observe();
        let mut items = Vec::new();
        while let Some(item) = observer.next().await {
            items.push(item?);
        }
        Ok(items)
    }
}

impl<T> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len())
            .field("terminated", &self.is_terminated())
            .finish()
    }
}
