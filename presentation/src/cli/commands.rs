//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot submission results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for inquiry
#[derive(Parser, Debug)]
#[command(name = "inquiry")]
#[command(author, version, about = "Compose and submit a contact inquiry")]
#[command(long_about = r#"
Inquiry validates a contact form and submits it to a configured endpoint.

Run it with no arguments for the interactive terminal form, or pass the
inquiry text plus field flags for a one-shot submission.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./inquiry.toml      Project-level config
3. ~/.config/inquiry/config.toml   Global config

Example:
  inquiry
  inquiry "My widget arrived broken, what now?" --name "Jo Doe" \
      --email jo@example.com --subject support
  inquiry "Invoice question" --name Ada --email ada@example.com \
      --subject business --phone "+1 555 123 4567" --contact-method phone
"#)]
pub struct Cli {
    /// The inquiry text (omit to start the interactive form)
    pub message: Option<String>,

    /// Force the interactive terminal form
    #[arg(long)]
    pub tui: bool,

    /// Your name
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Your email address
    #[arg(short, long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Your phone number (optional)
    #[arg(short, long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Inquiry subject: general, support, business, or other
    #[arg(short, long, value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// Preferred contact method: phone, email, no-preference, or other
    #[arg(long, value_name = "METHOD")]
    pub contact_method: Option<String>,

    /// Override the configured endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format for one-shot submissions
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether any form field was supplied on the command line
    pub fn has_field_args(&self) -> bool {
        self.message.is_some()
            || self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.subject.is_some()
            || self.contact_method.is_some()
    }
}
