//! Independent readers over a sequence's event log

use super::log::{EventLog, Slot};
use crate::error::Result;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed stream of sequence values
pub type SequenceStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Reads a sequence from its first event, at its own pace
pub struct Observer<T> {
    log: Arc<EventLog<T>>,
    cursor: usize,
    done: bool,
}

impl<T: Clone> Observer<T> {
    pub(crate) fn new(log: Arc<EventLog<T>>) -> Self {
        Self {
            log,
            cursor: 0,
            done: false,
        }
    }

    /// Next value, the terminal error, or `None` after the end
    ///
    /// Yields `Some(Err(_))` at most once; every call after that returns `None`.
    pub async fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }
        loop {
            // Registered before reading so a push between the read and the
            // await still wakes us.
            let notified = self.log.notify().notified();
            match self.log.get(self.cursor) {
                Slot::Item(item) => {
                    self.cursor += 1;
                    return Some(Ok(item));
                }
                Slot::Failed(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Slot::Complete => {
                    self.done = true;
                    return None;
                }
                Slot::Pending => notified.await,
            }
        }
    }

    /// Number of values this observer has consumed
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Convert into a `futures::Stream`
    pub fn into_stream(self) -> SequenceStream<T>
    where
        T: Send + 'static,
    {
        Box::pin(futures::stream::unfold(self, |mut observer| async move {
            observer.next().await.map(|item| (item, observer))
        }))
    }
}
