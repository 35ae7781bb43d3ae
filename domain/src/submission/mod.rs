//! Submission lifecycle state machine

pub mod state;

pub use state::{SubmissionPhase, SubmissionState};
