//! Progress reporting for one-shot submissions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquiry_application::SubmissionProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the submit request is on the wire
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_validation_failed(&self, error_count: usize) {
        println!(
            "{} {} field(s) need attention",
            "->".yellow(),
            error_count
        );
    }

    fn on_submit_started(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Sending inquiry...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_submit_succeeded(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "Inquiry sent".green()));
        }
    }

    fn on_submit_failed(&self, message: &str) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.abandon_with_message(format!("{}", message.red()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_validation_failed(&self, error_count: usize) {
        println!("-> {} field(s) need attention", error_count);
    }

    fn on_submit_started(&self) {
        println!("-> Sending inquiry...");
    }

    fn on_submit_succeeded(&self) {
        println!("   v sent");
    }

    fn on_submit_failed(&self, message: &str) {
        println!("   x {}", message);
    }
}
