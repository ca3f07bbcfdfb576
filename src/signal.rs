//! Ctrl+C handling for scan cancellation.
//!
//! Wraps an `AtomicBool` flag that is set when an interrupt signal arrives.
//! The flag is handed to the scan engine, which checks it between files and
//! returns a partial result instead of aborting.
//!
//! ```rust,no_run
//! use dupelens::signal::install_handler;
//!
//! let handler = install_handler().expect("failed to install signal handler");
//! let flag = handler.flag();
//! // Pass `flag` to EngineConfig::with_cancel_flag.
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag set by Ctrl+C or by the caller.
#[derive(Debug, Clone)]
pub struct CancelHandler {
    flag: Arc<AtomicBool>,
}

impl CancelHandler {
    /// Create a handler with cancellation not yet requested.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Manually request cancellation.
    pub fn request_cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Clone of the underlying flag for passing to worker threads.
    #[must_use]
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }
}

impl Default for CancelHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a Ctrl+C handler that sets the cancellation flag.
///
/// # Errors
///
/// Returns `ctrlc::Error` if a handler is already installed or the platform
/// refuses the registration.
pub fn install_handler() -> Result<CancelHandler, ctrlc::Error> {
    let handler = CancelHandler::new();
    let flag = handler.flag();

    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "\nInterrupted. Finishing current files...");
    })?;

    Ok(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_starts_uncancelled() {
        let handler = CancelHandler::new();
        assert!(!handler.is_cancelled());
    }

    #[test]
    fn test_request_cancel_sets_flag() {
        let handler = CancelHandler::new();
        handler.request_cancel();
        assert!(handler.is_cancelled());
        assert!(handler.flag().load(Ordering::SeqCst));
    }

    #[test]
    fn test_flag_is_shared() {
        let handler = CancelHandler::new();
        let flag = handler.flag();
        flag.store(true, Ordering::SeqCst);
        assert!(handler.is_cancelled());
    }
}
