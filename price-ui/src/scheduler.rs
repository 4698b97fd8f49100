//! Delayed completion of a submitted estimate.
//!
//! The UI thread must keep drawing "Analyzing..." while the delay runs, so the
//! wait happens on a tokio task and the result is handed back through a
//! callback.

use std::time::Duration;

use price_core::PendingEstimate;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::debug;

/// Waits `delay` on `runtime`, then passes `pending` to `on_ready`.
///
/// The wait cannot be cancelled; a form reset in the meantime is detected
/// when `pending` is completed.
pub fn schedule_completion<F>(
    runtime: &Handle,
    delay: Duration,
    pending: PendingEstimate,
    on_ready: F,
) -> JoinHandle<()>
where
    F: FnOnce(PendingEstimate) + Send + 'static,
{
    debug!(?delay, "estimate scheduled");
    runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        on_ready(pending);
    })
}
