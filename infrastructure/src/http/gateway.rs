//! reqwest-based implementation of the contact gateway.
//!
//! POSTs the inquiry as JSON to the configured endpoint. Any HTTP success
//! status counts as accepted and the response body is ignored; on a
//! non-success status the body is read and its `message` field, when
//! present, becomes the surfaced error.

use async_trait::async_trait;
use inquiry_application::{ContactGateway, GatewayError};
use inquiry_domain::Inquiry;
use tracing::{debug, warn};

/// Contact gateway that talks to the collaborator endpoint over HTTP.
pub struct HttpContactGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactGateway {
    /// Create a gateway with a default client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a gateway whose requests give up after `timeout`.
    ///
    /// Without a timeout a hung endpoint keeps the submission pending until
    /// the transport gives up on its own.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a gateway with a caller-configured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this gateway posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(inquiry)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Endpoint accepted inquiry (HTTP {})", status.as_u16());
            return Ok(());
        }

        // Body read failures fold into "no message": the status alone is
        // enough to report the rejection.
        let body = response.text().await.unwrap_or_default();
        warn!("Endpoint rejected inquiry (HTTP {})", status.as_u16());

        Err(GatewayError::Rejected {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

/// Pull the human-readable `message` field out of a JSON error body.
///
/// Returns `None` for unparseable bodies, non-string messages, and blank
/// messages; callers fall back to a generic error text.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_error_body() {
        let body = r#"{"message": "Invalid data", "errors": {"email": ["Enter a valid email address."]}}"#;
        assert_eq!(extract_error_message(body), Some("Invalid data".to_string()));
    }

    #[test]
    fn test_extract_message_missing_field() {
        assert_eq!(extract_error_message(r#"{"detail": "Not found"}"#), None);
    }

    #[test]
    fn test_extract_message_unparseable_body() {
        assert_eq!(extract_error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_extract_message_non_string_or_blank() {
        assert_eq!(extract_error_message(r#"{"message": 42}"#), None);
        assert_eq!(extract_error_message(r#"{"message": ""}"#), None);
        assert_eq!(extract_error_message(r#"{"message": "   "}"#), None);
    }

    #[test]
    fn test_gateway_remembers_endpoint() {
        let gateway = HttpContactGateway::new("http://localhost:8000/api/contact/");
        assert_eq!(gateway.endpoint(), "http://localhost:8000/api/contact/");
    }
}
