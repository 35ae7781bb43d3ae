//! Infrastructure layer for inquiry
//!
//! This crate contains the adapters behind the application ports: the
//! reqwest-based contact gateway, configuration file loading, and the
//! JSONL submission journal.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use http::HttpContactGateway;
pub use logging::JsonlSubmissionLogger;
