//! Port for submission progress notifications.
//!
//! Implemented by the presentation layer (spinner, status line). Callbacks
//! are synchronous and must not block.

/// Receives lifecycle notifications while a submit request runs.
pub trait SubmissionProgress: Send + Sync {
    /// Validation rejected the form; no request was sent.
    fn on_validation_failed(&self, error_count: usize) {
        let _ = error_count;
    }

    /// The outbound request is on the wire.
    fn on_submit_started(&self) {}

    /// The endpoint accepted the inquiry.
    fn on_submit_succeeded(&self) {}

    /// The endpoint rejected the inquiry or transport failed.
    fn on_submit_failed(&self, message: &str) {
        let _ = message;
    }
}

/// No-op implementation for tests and quiet mode.
pub struct NoSubmissionProgress;

impl SubmissionProgress for NoSubmissionProgress {}
