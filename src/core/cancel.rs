//! Interrupt token polled by countdown loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SeshError;

/// Shared cancellation flag set by the Ctrl-C handler.
///
/// Countdowns poll the token once per tick. Phases that treat an
/// interrupt as "skip ahead" (the preparation window) call
/// [`CancelToken::reset`] so the skip does not bleed into the next
/// countdown.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token as triggered.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Check whether the token has been triggered.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clear the token for the next countdown.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Route Ctrl-C into the token instead of killing the process.
///
/// # Errors
///
/// Returns an error if a handler is already installed for this process.
pub fn install_ctrl_c_handler(token: &CancelToken) -> Result<(), SeshError> {
    let token = token.clone();
    ctrlc::set_handler(move || token.trigger())
        .map_err(|e| SeshError::Config(format!("Failed to install Ctrl-C handler: {e}")))
}
