//! TOML configuration file schema
//!
//! ```toml
//! [endpoint]
//! url = "https://example.com/api/contact/"
//!
//! [submission]
//! confirmation_secs = 4
//! timeout_secs = 30
//!
//! [log]
//! journal = "~/.local/share/inquiry/submissions.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: EndpointConfig,
    pub submission: SubmissionConfig,
    pub log: LogConfig,
}

/// Where the inquiry is POSTed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/api/contact/".to_string(),
        }
    }
}

/// Submission behavior knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// How long the confirmation banner stays up before auto-dismissing.
    pub confirmation_secs: u64,
    /// Optional request timeout. Off by default: a hung request keeps the
    /// form disabled until the transport gives up on its own.
    pub timeout_secs: Option<u64>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            confirmation_secs: 4,
            timeout_secs: None,
        }
    }
}

/// Structured logging destinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Path of the JSONL submission journal. No journal when unset.
    pub journal: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.url, "http://localhost:8000/api/contact/");
        assert_eq!(config.submission.confirmation_secs, 4);
        assert_eq!(config.submission.timeout_secs, None);
        assert_eq!(config.log.journal, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults_elsewhere() {
        use figment::providers::{Format, Serialized, Toml};

        let config: FileConfig = figment::Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(
                r#"
                [endpoint]
                url = "https://example.com/contact"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.endpoint.url, "https://example.com/contact");
        assert_eq!(config.submission.confirmation_secs, 4);
    }
}
