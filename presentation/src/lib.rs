//! Presentation layer for inquiry
//!
//! This crate contains the CLI definition, console output formatting,
//! submission progress reporting, and the interactive terminal form.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::FormApp;
