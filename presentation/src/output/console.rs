//! Console formatting for submission outcomes

use colored::Colorize;
use inquiry_application::SubmitOutcome;
use inquiry_domain::FieldError;

/// Formats a [`SubmitOutcome`] for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable, colored output
    pub fn format(outcome: &SubmitOutcome) -> String {
        match outcome {
            SubmitOutcome::Accepted => {
                format!("{} Thank you! Your inquiry has been sent.", "v".green())
            }
            SubmitOutcome::Invalid(errors) => {
                let mut out = format!(
                    "{} The form has {} problem(s):\n",
                    "x".red(),
                    errors.len()
                );
                for error in errors {
                    out.push_str(&Self::format_field_error(error));
                    out.push('\n');
                }
                out.push_str("\nNothing was sent. Fix the fields above and try again.");
                out
            }
            SubmitOutcome::Rejected { message } => {
                format!("{} {}", "x".red(), message.red())
            }
        }
    }

    /// JSON output for scripting
    pub fn format_json(outcome: &SubmitOutcome) -> String {
        let value = match outcome {
            SubmitOutcome::Accepted => serde_json::json!({ "status": "accepted" }),
            SubmitOutcome::Invalid(errors) => serde_json::json!({
                "status": "invalid",
                "errors": errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "field": e.field.as_str(),
                            "message": e.message,
                        })
                    })
                    .collect::<Vec<_>>(),
            }),
            SubmitOutcome::Rejected { message } => serde_json::json!({
                "status": "rejected",
                "message": message,
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_field_error(error: &FieldError) -> String {
        format!(
            "  {} {}: {}",
            "-".red(),
            error.field.label().bold(),
            error.message
        )
    }
}
