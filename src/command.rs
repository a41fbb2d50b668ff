//! The merge command: selection in, `merged.pdf` out, one toast reported.
//!
//! [`MergeCommand::run`] is the whole user-visible workflow:
//!
//! 1. Ask the [`SelectionProvider`] for the current selection
//! 2. Keep the PDFs, in selection order
//! 3. Merge them in memory
//! 4. Resolve the destination and write the bytes there
//! 5. Report the outcome to the [`NotificationSink`]
//!
//! Nothing touches the disk until every input has been read and decoded.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};
use crate::io::PdfWriter;
use crate::merge::{MergeOptions, MergeStatistics, Merger, OutputPathResolver};
use crate::notify::{NotificationSink, Toast};
use crate::selection::{SelectedItem, SelectionProvider};
use crate::utils::is_pdf_path;

/// Toast title after a successful merge.
pub const SUCCESS_TITLE: &str = "PDFs merged successfully!";

/// Toast title for every failure other than an empty selection.
pub const FAILURE_TITLE: &str = "Error";

/// Keep the items whose extension is `pdf` (any case), in order.
pub fn filter_pdf_paths(items: Vec<SelectedItem>) -> Vec<PathBuf> {
    items
        .into_iter()
        .map(|item| item.path)
        .filter(|path| is_pdf_path(path))
        .collect()
}

/// Summary of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    /// Where the merged document was written.
    pub output_path: PathBuf,

    /// Number of input documents.
    pub files_merged: usize,

    /// Pages in the merged document.
    pub total_pages: usize,

    /// Size of the written file.
    pub bytes_written: u64,

    /// Seconds spent reading and decoding inputs.
    pub load_seconds: f64,

    /// Seconds spent merging, serialization included.
    pub merge_seconds: f64,

    /// Seconds spent writing the output.
    pub write_seconds: f64,

    /// Per-input breakdown; skipped in JSON output.
    #[serde(skip)]
    pub statistics: Option<MergeStatistics>,
}

/// Runs a complete merge against injected selection and notification
/// capabilities.
#[derive(Debug, Clone)]
pub struct MergeCommand {
    merger: Merger,
    resolver: OutputPathResolver,
    writer: PdfWriter,
}

impl MergeCommand {
    /// Create a command with default merge options, falling back to the
    /// current user's `~/Downloads`.
    pub fn new() -> Self {
        Self {
            merger: Merger::new(),
            resolver: OutputPathResolver::from_env(),
            writer: PdfWriter::new(),
        }
    }

    /// Use `options` for merging.
    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.merger = Merger::with_options(options);
        self
    }

    /// Fall back to `<home>/Downloads` instead of the real home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.resolver = OutputPathResolver::new(home);
        self
    }

    /// Use a specific writer.
    pub fn with_writer(mut self, writer: PdfWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Home directory used for the `Downloads` fallback.
    pub fn home(&self) -> &Path {
        self.resolver.home()
    }

    /// Run the merge once and report the outcome to `sink`.
    ///
    /// Exactly one toast is shown per call:
    /// - `Success` "PDFs merged successfully!" with `Saved to <path>`
    /// - `Failure` "No PDF files selected" when nothing qualifies
    /// - `Failure` "Error" with the error text otherwise
    ///
    /// # Errors
    ///
    /// The error that produced the failure toast is returned as well, so
    /// the caller can choose an exit code.
    pub async fn run(
        &self,
        selection: &dyn SelectionProvider,
        sink: &dyn NotificationSink,
    ) -> Result<MergeReport> {
        match self.execute(selection).await {
            Ok(report) => {
                sink.show(
                    &Toast::success(SUCCESS_TITLE)
                        .with_message(format!("Saved to {}", report.output_path.display())),
                );
                Ok(report)
            }
            Err(err) => {
                tracing::debug!(error = %err, kind = ?err.kind(), "Merge failed");
                sink.show(&failure_toast(&err));
                Err(err)
            }
        }
    }

    /// Run the merge without reporting.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - Whatever the selection provider fails with
    /// - [`MergeError::NoPdfSelected`] when no selected item is a PDF
    /// - Read and decode errors from the merge
    /// - [`MergeError::Write`] if the output cannot be written
    pub async fn execute(&self, selection: &dyn SelectionProvider) -> Result<MergeReport> {
        let items = selection.selected_items().await?;
        let selected = items.len();
        let pdf_paths = filter_pdf_paths(items);

        if pdf_paths.is_empty() {
            tracing::info!(selected, "Selection contains no PDF files");
            return Err(MergeError::NoPdfSelected);
        }

        tracing::debug!(paths = ?pdf_paths, "Selected PDF files");

        let result = self.merger.merge(&pdf_paths).await?;
        let destination = self.resolver.resolve(&pdf_paths);
        let write_stats = self.writer.save(&result.bytes, &destination).await?;

        tracing::info!(
            output = %write_stats.output_path.display(),
            pages = result.statistics.total_pages,
            size = %write_stats.format_file_size(),
            "Wrote merged PDF"
        );

        let stats = result.statistics;
        Ok(MergeReport {
            output_path: write_stats.output_path,
            files_merged: stats.files_merged,
            total_pages: stats.total_pages,
            bytes_written: write_stats.file_size,
            load_seconds: stats.load_time.as_secs_f64(),
            merge_seconds: stats.merge_time.as_secs_f64(),
            write_seconds: write_stats.write_time.as_secs_f64(),
            statistics: Some(stats),
        })
    }
}

impl Default for MergeCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// The toast reported for `err`.
pub fn failure_toast(err: &MergeError) -> Toast {
    match err {
        MergeError::NoPdfSelected => Toast::failure(err.to_string()),
        _ => Toast::failure(FAILURE_TITLE).with_message(err.to_string()),
    }
}
