//! Port for the structured submission journal.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port records each
//! submission attempt as a machine-readable record (JSONL).

use serde_json::Value;

/// A structured submission event for the journal.
pub struct SubmissionEvent {
    /// Event type identifier (e.g., "submission_accepted", "validation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording submission events.
///
/// The `log` method is intentionally synchronous and non-fallible so a full
/// disk or unwritable path never disrupts a submission; journal failures
/// are silently ignored.
pub trait SubmissionLogger: Send + Sync {
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when no journal is configured.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}
