//! Port for the outbound contact-submission call.
//!
//! The collaborator endpoint accepts a JSON document and returns success or
//! a JSON error body. Its only contract used here: on failure the body may
//! carry a human-readable `message` field.

use async_trait::async_trait;
use inquiry_domain::Inquiry;
use thiserror::Error;

/// Shown when the collaborator is unreachable or returns an unusable body
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while sending your inquiry. Please try again later.";

/// Errors from the contact gateway.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// The endpoint answered with a non-success status.
    #[error("endpoint rejected the inquiry (HTTP {status})")]
    Rejected {
        status: u16,
        /// The `message` field of the response body, when present.
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The message to surface to the user: the collaborator's own message
    /// verbatim when it provided one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Port for submitting an inquiry to the collaborator endpoint.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// POST the inquiry. Success means any HTTP success status; the
    /// response body is ignored on success.
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_endpoint_message() {
        let error = GatewayError::Rejected {
            status: 400,
            message: Some("Invalid data".to_string()),
        };
        assert_eq!(error.user_message(), "Invalid data");
    }

    #[test]
    fn test_user_message_falls_back_when_body_had_none() {
        let error = GatewayError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_user_message_falls_back_on_transport_faults() {
        let error = GatewayError::Transport("connection refused".to_string());
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
