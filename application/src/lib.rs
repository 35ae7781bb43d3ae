//! Application layer for inquiry
//!
//! This crate contains the submit-inquiry use case and the ports it talks
//! through: the contact gateway (outbound HTTP), submission progress
//! notifications, and the structured submission journal.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::contact_gateway::{ContactGateway, GatewayError, GENERIC_FAILURE_MESSAGE};
pub use ports::submission_logger::{
    NoSubmissionLogger, SubmissionEvent, SubmissionLogger,
};
pub use ports::submission_progress::{NoSubmissionProgress, SubmissionProgress};
pub use use_cases::submit_inquiry::{SubmitError, SubmitInquiryUseCase, SubmitOutcome};
