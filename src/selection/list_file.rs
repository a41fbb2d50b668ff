//! Selection read from a list file, one path per line.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::{SelectedItem, SelectionProvider};
use crate::error::{MergeError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the selection from a file, or from stdin when the path is `-`.
///
/// Each line is one path, kept verbatim apart from its line ending, since
/// file names may start or end with spaces. Whitespace-only lines and
/// lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct ListFileSelection {
    source: PathBuf,
}

impl ListFileSelection {
    /// Read the selection from `source`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read the selection from standard input.
    pub fn stdin() -> Self {
        Self::new(STDIN_PATH)
    }

    /// The list file this selection reads.
    pub fn source(&self) -> &Path {
        &self.source
    }

    fn reads_stdin(&self) -> bool {
        self.source.as_os_str() == STDIN_PATH
    }

    async fn read(&self) -> Result<Vec<SelectedItem>> {
        if self.reads_stdin() {
            return read_list(BufReader::new(tokio::io::stdin()), &self.source).await;
        }

        let file = tokio::fs::File::open(&self.source)
            .await
            .map_err(|source| MergeError::Read {
                path: self.source.clone(),
                source,
            })?;
        read_list(BufReader::new(file), &self.source).await
    }
}

impl SelectionProvider for ListFileSelection {
    fn selected_items(&self) -> BoxFuture<'_, Result<Vec<SelectedItem>>> {
        self.read().boxed()
    }
}

/// Parse a path list from `reader`. `origin` names the list in errors.
pub async fn read_list<R>(reader: R, origin: &Path) -> Result<Vec<SelectedItem>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut items = Vec::new();

    while let Some(line) = lines.next_line().await.map_err(|source| MergeError::Read {
        path: origin.to_path_buf(),
        source,
    })? {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        items.push(SelectedItem::new(line));
    }

    tracing::debug!(list = %origin.display(), count = items.len(), "Read input list");
    Ok(items)
}
