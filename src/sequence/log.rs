//! Append-only event log shared by a producer and its observers

use crate::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

enum Terminal {
    Complete,
    Failed(Error),
}

struct LogState<T> {
    items: Vec<T>,
    terminal: Option<Terminal>,
}

/// What an observer finds at its cursor
pub(crate) enum Slot<T> {
    Item(T),
    Failed(Error),
    Complete,
    Pending,
}

pub(crate) struct EventLog<T> {
    state: Mutex<LogState<T>>,
    notify: Notify,
}

impl<T> EventLog<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(LogState {
                items: Vec::new(),
                terminal: None,
            }),
            notify: Notify::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LogState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a value; returns false once the log is terminated
    pub(crate) fn push(&self, item: T) -> bool {
        {
            let mut state = self.lock();
            if state.terminal.is_some() {
                return false;
            }
            state.items.push(item);
        }
        self.notify.notify_waiters();
        true
    }

    /// Record the terminal event; only the first call has an effect
    fn terminate(&self, terminal: Terminal) -> bool {
        {
            let mut state = self.lock();
            if state.terminal.is_some() {
                return false;
            }
            state.terminal = Some(terminal);
        }
        self.notify.notify_waiters();
        true
    }

    pub(crate) fn complete(&self) -> bool {
        self.terminate(Terminal::Complete)
    }

    pub(crate) fn fail(&self, error: Error) -> bool {
        self.terminate(Terminal::Failed(error))
    }

    pub(crate) fn is_terminated(&self) -> bool {
        self.lock().terminal.is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub(crate) fn notify(&self) -> &Notify {
        &self.notify
    }
}

impl<T: Clone> EventLog<T> {
    pub(crate) fn get(&self, index: usize) -> Slot<T> {
        let state = self.lock();
        if let Some(item) = state.items.get(index) {
            return Slot::Item(item.clone());
        }
        match &state.terminal {
            Some(Terminal::Complete) => Slot::Complete,
            Some(Terminal::Failed(e)) => Slot::Failed(e.clone()),
            None => Slot::Pending,
        }
    }
}
