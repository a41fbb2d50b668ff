//! Terminal output for mergepdfs.
//!
//! User-facing lines go through [`OutputFormatter`]; diagnostics go through
//! `tracing` (see [`init_tracing`]).

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::merge::MergeStatistics;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "MERGEPDFS_LOG";

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `MERGEPDFS_LOG` when set, otherwise `debug` in
/// verbose mode and `warn` elsewhere. Calling this twice is harmless; the
/// second call is ignored.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Display per-file page counts and totals in verbose mode.
pub fn display_merge_statistics(formatter: &OutputFormatter, stats: &MergeStatistics) {
    if !formatter.shows_details() {
        return;
    }

    for (idx, source) in stats.sources.iter().enumerate() {
        formatter.list_item(
            idx + 1,
            &format!("{} ({} pages)", source.path.display(), source.page_count),
        );
    }
    formatter.detail("Input files", &stats.files_merged.to_string());
    formatter.detail("Total pages", &stats.total_pages.to_string());
    formatter.detail("Input size", &stats.format_input_size());
    formatter.detail(
        "Load time",
        &format!("{:.2}s", stats.load_time.as_secs_f64()),
    );
    formatter.detail(
        "Merge time",
        &format!("{:.2}s", stats.merge_time.as_secs_f64()),
    );
}
