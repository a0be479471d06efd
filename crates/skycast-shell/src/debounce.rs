//! Cancellable delayed tasks for search-as-you-type input.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Runs the most recently scheduled task once `delay` has passed without a
/// newer one. Scheduling again cancels the pending task.
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.lock().replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!("Debounced task superseded");
                }
                _ = tokio::time::sleep(delay) => task.await,
            }
        });
    }

    /// Drop the pending task, if any. A task already past its delay still
    /// runs to completion.
    pub fn cancel(&self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
