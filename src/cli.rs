//! CLI argument parsing for mergepdfs.
//!
//! This module defines the command-line interface structure using `clap`.
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Merging {} paths", cli.inputs.len());
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{Config, NotifyTarget, SelectionSource};
use crate::error::{MergeError, Result};

/// Merge the selected PDF files into a single document.
///
/// Without arguments, mergepdfs merges the PDFs currently selected in
/// Finder. The result is written as `merged.pdf` next to the inputs, or to
/// `~/Downloads` when the inputs live in different folders.
#[derive(Parser, Debug)]
#[command(name = "mergepdfs")]
#[command(version)]
#[command(about = "Merge the selected PDF files into a single document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Files to merge, in order
    ///
    /// Glob patterns are expanded. Files without a .pdf extension are
    /// ignored. When omitted, the current Finder selection is used.
    ///
    /// Examples:
    ///   mergepdfs cover.pdf chapter*.pdf
    #[arg(value_name = "FILE", conflicts_with = "input_list")]
    pub inputs: Vec<String>,

    /// Read the selection from a file (one path per line)
    ///
    /// Use '-' to read from stdin. Blank lines and lines starting
    /// with '#' are skipped.
    #[arg(long, value_name = "FILE")]
    pub input_list: Option<PathBuf>,

    /// Where to report the outcome
    #[arg(long, value_name = "TARGET", env = "MERGEPDFS_NOTIFY", default_value = "console")]
    #[arg(value_parser = ["console", "desktop", "all"], ignore_case = true)]
    pub notify: String,

    /// Write content streams uncompressed
    #[arg(long)]
    pub no_compress: bool,

    /// Fail unless Finder is the frontmost application
    ///
    /// Only applies when the selection comes from Finder.
    #[arg(long, conflicts_with_all = ["inputs", "input_list"])]
    pub require_frontmost: bool,

    /// Print a JSON report of the merge on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbose output - show each input and timing details
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification target is invalid or the
    /// configuration fails validation.
    pub fn to_config(&self) -> Result<Config> {
        let notify = NotifyTarget::from_str(&self.notify)?;

        let source = match (&self.input_list, self.inputs.is_empty()) {
            (Some(list), _) => SelectionSource::InputList(list.clone()),
            (None, false) => SelectionSource::Paths(self.inputs.clone()),
            (None, true) => SelectionSource::Finder {
                require_frontmost: self.require_frontmost,
            },
        };

        let config = Config {
            source,
            notify,
            compress: !self.no_compress,
            verbose: self.verbose,
            quiet: self.quiet,
            json: self.json,
        };

        config.validate().map_err(|e| {
            MergeError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// # Errors
    ///
    /// Returns an error for flag combinations clap cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.iter().any(|input| input.trim().is_empty()) {
            return Err(MergeError::invalid_config("Input paths cannot be empty"));
        }

        if self.require_frontmost && (self.input_list.is_some() || !self.inputs.is_empty()) {
            return Err(MergeError::invalid_config(
                "--require-frontmost only applies to the Finder selection",
            ));
        }

        Ok(())
    }
}
