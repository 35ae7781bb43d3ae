//! Use cases orchestrating the domain over the ports

pub mod submit_inquiry;

pub use submit_inquiry::{SubmitError, SubmitInquiryUseCase, SubmitOutcome};
