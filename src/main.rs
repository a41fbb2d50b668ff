//! mergepdfs - merge the selected PDF files into a single document.

use clap::Parser;
use std::process;

use mergepdfs::cli::Cli;
use mergepdfs::command::{MergeCommand, failure_toast};
use mergepdfs::error::MergeError;
use mergepdfs::notify::{ConsoleNotifier, NotificationSink};
use mergepdfs::output::{OutputFormatter, display_merge_statistics, init_tracing};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // The failure toast has already been shown; only the exit code is left.
    if let Err(err) = run(cli).await {
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), MergeError> {
    let config = match cli.validate().and_then(|()| cli.to_config()) {
        Ok(config) => config,
        Err(err) => {
            // No sink exists yet, so report on the console.
            ConsoleNotifier::new(OutputFormatter::new(cli.quiet, false)).show(&failure_toast(&err));
            return Err(err);
        }
    };

    tracing::debug!(?config, "{} v{}", mergepdfs::NAME, mergepdfs::VERSION);

    let formatter = config.formatter();
    let selection = config.selection_provider();
    let sink = config.notification_sink();

    let command = MergeCommand::new().with_options(config.merge_options());
    let report = command.run(selection.as_ref(), sink.as_ref()).await?;

    // stdout carries only the report in JSON mode
    if config.should_print()
        && let Some(stats) = &report.statistics
    {
        display_merge_statistics(&formatter, stats);
    }

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize merge report"),
        }
    }

    Ok(())
}
