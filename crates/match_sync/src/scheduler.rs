//! Cancellable "thinking" timer.
//!
//! At most one bot move is pending per timer. Scheduling a new one aborts
//! the previous task, and so does dropping the timer.

use rand::Rng;
use std::future::Future;
use std::ops::Range;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Draws a think delay uniformly from `range` (milliseconds, end exclusive).
pub fn draw_delay<R: Rng + ?Sized>(rng: &mut R, range: Range<u64>) -> Duration {
    Duration::from_millis(rng.gen_range(range))
}

#[derive(Debug, Default)]
pub struct ThinkTimer {
    pending: Option<JoinHandle<()>>,
}

impl ThinkTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` after `delay`, cancelling whatever was pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Aborts the pending task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ThinkTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
