//! Trailing debounce built on tokio timers.
//!
//! The scheduler owns at most one pending timer task. Scheduling replaces
//! the previous pending action; only the last schedule within a burst
//! ever fires.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct DebounceScheduler {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceScheduler {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }

    /// Arm the timer: after `delay` of quiet, run `action`. Any previously
    /// scheduled action that has not fired yet is dropped.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        if let Some(prev) = self.pending.lock().unwrap().replace(handle) {
            prev.abort();
        }
    }

    /// Drop the pending action, if any.
    pub fn cancel(&self) {
        if let Some(prev) = self.pending.lock().unwrap().take() {
            prev.abort();
        }
    }
}
