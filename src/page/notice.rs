//! Transient notice lifecycle.
//!
//! # Responsibilities
//! - Show a notice on the form surface and remove it after a fixed delay
//! - Guarantee at most one pending removal at a time
//!
//! # Design Decisions
//! - The removal is an explicit cancellable task, not an ambient interval:
//!   showing a new notice aborts the previous removal so the fresh notice
//!   gets the full lifetime
//! - Dropping the scheduler aborts the pending removal

use crate::page::surface::FormSurface;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Schedules removal of transient notices shown on a form surface.
pub struct NoticeScheduler {
    surface: Arc<dyn FormSurface>,
    lifetime: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl NoticeScheduler {
    /// Create a scheduler that removes notices after `lifetime`.
    pub fn new(surface: Arc<dyn FormSurface>, lifetime: Duration) -> Self {
        Self {
            surface,
            lifetime,
            pending: Mutex::new(None),
        }
    }

    /// Show `message` and schedule its removal. Supersedes any pending
    /// removal from an earlier notice. Outside a Tokio runtime the notice
    /// is shown but its removal cannot be scheduled.
    pub fn show(&self, message: &str) {
        self.surface.show_notice(message);

        let mut pending = self.pending.lock().unwrap();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::warn!("No async runtime, notice removal not scheduled");
                return;
            }
        };

        let surface = Arc::clone(&self.surface);
        let lifetime = self.lifetime;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            surface.remove_notice();
        }));
    }

    /// Cancel a pending removal without touching the surface.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for NoticeScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
