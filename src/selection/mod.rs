//! Where the list of files to merge comes from.
//!
//! A [`SelectionProvider`] hands the driver an ordered list of
//! [`SelectedItem`]s. The driver neither knows nor cares whether they came
//! from Finder, the command line or a list file.
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::selection::{SelectionProvider, StaticSelection};
//!
//! # async fn example() -> mergepdfs::Result<()> {
//! let selection = StaticSelection::new(["scans/*.pdf", "cover.pdf"]);
//! for item in selection.selected_items().await? {
//!     println!("{}", item.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod finder;
pub mod list_file;

pub use finder::FinderSelection;
pub use list_file::ListFileSelection;

use futures::FutureExt;
use futures::future::BoxFuture;
use std::path::PathBuf;

use crate::error::Result;
use crate::utils::collect_paths_for_patterns;

/// One entry of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    /// Filesystem path of the selected entry.
    pub path: PathBuf,
}

impl SelectedItem {
    /// Create an item for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl From<PathBuf> for SelectedItem {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Source of the user's current selection.
///
/// Items are returned in selection order. Implementations may return
/// anything the user selected, PDFs or not; filtering is the caller's job.
pub trait SelectionProvider: Send + Sync {
    /// Fetch the current selection.
    fn selected_items(&self) -> BoxFuture<'_, Result<Vec<SelectedItem>>>;
}

/// Paths given up front, typically on the command line.
///
/// An entry naming an existing file is used as is. Any other entry is
/// treated as a glob pattern: matches are expanded in place and a pattern
/// that matches nothing is kept as a literal path.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    patterns: Vec<String>,
}

impl StaticSelection {
    /// Create a selection from paths or glob patterns.
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

impl SelectionProvider for StaticSelection {
    fn selected_items(&self) -> BoxFuture<'_, Result<Vec<SelectedItem>>> {
        async move {
            let paths = collect_paths_for_patterns(&self.patterns)?;
            Ok(paths.into_iter().map(SelectedItem::from).collect())
        }
        .boxed()
    }
}
