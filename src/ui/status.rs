//! Transient status line with delayed clear.
//!
//! # Design Decisions
//! - Re-triggering while a clear is pending aborts the stale timer, so a
//!   rapid second message keeps the full display window

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ui::StatusKind;

/// The currently displayed transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Holds the transient status message and clears it after a fixed delay.
pub struct StatusBoard {
    current: Arc<Mutex<Option<StatusLine>>>,
    clear_after: Duration,
    pending_clear: Mutex<Option<JoinHandle<()>>>,
}

impl StatusBoard {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            clear_after,
            pending_clear: Mutex::new(None),
        }
    }

    /// Display a message and arm the clear timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set(&self, kind: StatusKind, text: &str) {
        *self.current.lock().unwrap() = Some(StatusLine {
            kind,
            text: text.to_string(),
        });

        let mut pending = self.pending_clear.lock().unwrap();
        if let Some(stale) = pending.take() {
            stale.abort();
        }

        let current = Arc::clone(&self.current);
        let delay = self.clear_after;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            *current.lock().unwrap() = None;
        }));
    }

    /// The message still on display, if any.
    pub fn current(&self) -> Option<StatusLine> {
        self.current.lock().unwrap().clone()
    }
}

impl Drop for StatusBoard {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_clear.lock().unwrap().take() {
            pending.abort();
        }
    }
}
