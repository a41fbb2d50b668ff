//! PDF merging operations.
//!
//! This module provides the two pieces of real logic in the crate:
//! - The [`Merger`], which concatenates the pages of several PDFs into one
//! - The output path policy in [`output_path`]
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::merge::{Merger, OutputPathResolver};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = vec![PathBuf::from("/docs/a.pdf"), PathBuf::from("/docs/b.pdf")];
//!
//! let result = Merger::new().merge(&paths).await?;
//! let destination = OutputPathResolver::from_env().resolve(&paths);
//! println!("{} pages -> {}", result.statistics.total_pages, destination.display());
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod output_path;

pub use merger::{MergeOptions, MergeResult, MergeStatistics, Merger, SourceSummary};
pub use output_path::{OUTPUT_FILE_NAME, OutputPathResolver, resolve_output_path};

use crate::error::Result;
use std::path::PathBuf;

/// Merge the PDFs at `paths`, in order, and return the serialized bytes.
///
/// Convenience function that creates a default merger and drops the
/// statistics.
///
/// # Errors
///
/// Returns an error if any input cannot be read or decoded.
pub async fn merge_pdfs(paths: &[PathBuf]) -> Result<Vec<u8>> {
    let result = Merger::new().merge(paths).await?;
    Ok(result.bytes)
}
