use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::warn;
use vizbench_common::PlatformError;

use super::{panic_message, UiExecutor, UiTask};

/// Executor that runs every task immediately on the calling thread.
///
/// Used by tests and by headless callers that have no separate UI thread.
#[derive(Debug, Default)]
pub struct InlineExecutor {
    blocking: AtomicUsize,
    deferred: AtomicUsize,
}

impl InlineExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `run_blocking` hand-offs so far.
    pub fn blocking_count(&self) -> usize {
        self.blocking.load(Ordering::Relaxed)
    }

    /// Number of `run_deferred` hand-offs so far.
    pub fn deferred_count(&self) -> usize {
        self.deferred.load(Ordering::Relaxed)
    }
}

impl UiExecutor for InlineExecutor {
    fn run_blocking(&self, task: UiTask) -> Result<(), PlatformError> {
        self.blocking.fetch_add(1, Ordering::Relaxed);
        catch_unwind(AssertUnwindSafe(task))
            .map_err(|payload| PlatformError::UiTaskPanicked(panic_message(payload.as_ref())))
    }

    fn run_deferred(&self, task: UiTask) -> Result<(), PlatformError> {
        self.deferred.fetch_add(1, Ordering::Relaxed);
        if let Err(payload) = catch_unwind(AssertUnwindSafe(task)) {
            warn!(
                error = %panic_message(payload.as_ref()),
                "deferred ui task panicked"
            );
        }
        Ok(())
    }
}
