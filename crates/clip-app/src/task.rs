//! Owned handle to a spawned, cancellable task.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::task::AbortHandle;

/// Slot holding at most one scheduled task.
///
/// Installing a new task aborts the previous one, and dropping the slot
/// aborts whatever is still pending, so a task never outlives its owner.
#[derive(Debug, Default)]
pub struct ScheduledTask {
    handle: Option<AbortHandle>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle`, aborting any task already held.
    pub fn replace(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the held task. Returns whether one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
