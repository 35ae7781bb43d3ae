//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Invalid submission transition: {0}")]
    InvalidTransition(String),

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Unknown contact method: {0}")]
    UnknownContactMethod(String),

    #[error("Inquiry is not submission-eligible: {0}")]
    NotEligible(String),
}

impl DomainError {
    /// Check if this error represents a rejected double-submit
    pub fn is_in_flight(&self) -> bool {
        matches!(self, DomainError::SubmissionInFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_error_display() {
        let error = DomainError::SubmissionInFlight;
        assert_eq!(error.to_string(), "A submission is already in flight");
    }

    #[test]
    fn test_is_in_flight_check() {
        assert!(DomainError::SubmissionInFlight.is_in_flight());
        assert!(!DomainError::UnknownSubject("spam".into()).is_in_flight());
        assert!(!DomainError::InvalidTransition("idle -> succeeded".into()).is_in_flight());
    }
}
