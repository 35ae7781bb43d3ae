//! CLI entrypoint for inquiry
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use inquiry_application::{
    NoSubmissionLogger, NoSubmissionProgress, SubmissionLogger, SubmissionProgress,
    SubmitInquiryUseCase, SubmitOutcome,
};
use inquiry_domain::{FieldId, FormStore, SubmissionState};
use inquiry_infrastructure::{ConfigLoader, HttpContactGateway, JsonlSubmissionLogger};
use inquiry_presentation::{Cli, ConsoleFormatter, FormApp, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // No field arguments means the interactive form
    let interactive = cli.tui || !cli.has_field_args();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // In interactive mode the terminal belongs to the form, so diagnostics
    // go to a log file instead, and only when verbosity was asked for.
    let _appender_guard = if interactive {
        if cli.verbose > 0 {
            let appender =
                tracing_appender::rolling::never(std::env::temp_dir(), "inquiry.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        } else {
            None
        }
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        None
    };

    info!("Starting inquiry");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.endpoint.url.clone());

    // === Dependency Injection ===
    // Contact gateway (HTTP adapter)
    let gateway = match config.submission.timeout_secs {
        Some(secs) => HttpContactGateway::with_timeout(&endpoint, Duration::from_secs(secs))
            .context("Failed to build HTTP client")?,
        None => HttpContactGateway::new(&endpoint),
    };

    // Submission journal (optional)
    let logger: Arc<dyn SubmissionLogger> = config
        .log
        .journal
        .as_ref()
        .and_then(JsonlSubmissionLogger::new)
        .map(|journal| {
            info!("Submission journal: {}", journal.path().display());
            Arc::new(journal) as Arc<dyn SubmissionLogger>
        })
        .unwrap_or_else(|| Arc::new(NoSubmissionLogger));

    let use_case =
        SubmitInquiryUseCase::new(Arc::new(gateway)).with_submission_logger(logger);

    // Interactive form
    if interactive {
        let mut app =
            FormApp::new(use_case).with_confirmation_secs(config.submission.confirmation_secs);
        app.run().await?;
        return Ok(());
    }

    // One-shot mode: fill the store from flags, submit once, print the outcome
    let mut store = FormStore::new();
    fill_store(&mut store, &cli);
    let mut state = SubmissionState::new();

    let progress: Box<dyn SubmissionProgress> = if cli.quiet {
        Box::new(NoSubmissionProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let outcome = use_case
        .execute(&mut store, &mut state, progress.as_ref())
        .await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    if !matches!(outcome, SubmitOutcome::Accepted) {
        std::process::exit(1);
    }

    Ok(())
}

/// Copy the supplied field flags into the form store
fn fill_store(store: &mut FormStore, cli: &Cli) {
    let fields = [
        (FieldId::Name, &cli.name),
        (FieldId::Email, &cli.email),
        (FieldId::Phone, &cli.phone),
        (FieldId::Subject, &cli.subject),
        (FieldId::Inquiry, &cli.message),
        (FieldId::ContactMethod, &cli.contact_method),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            store.set_value(field, value.clone());
        }
    }
}
