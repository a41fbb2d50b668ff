//! The current Finder selection, fetched through `osascript`.
//!
//! Only meaningful on macOS. Elsewhere `osascript` is missing and every
//! request fails with [`MergeError::Selection`].

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::process::Command;

use super::{SelectedItem, SelectionProvider};
use crate::error::{MergeError, Result};

const OSASCRIPT: &str = "osascript";

/// Prints the POSIX path of every selected Finder item, one per line.
const SELECTION_SCRIPT: &str = r#"
set output to ""
tell application "Finder"
    repeat with selectedItem in (selection as alias list)
        set output to output & POSIX path of selectedItem & linefeed
    end repeat
end tell
return output
"#;

/// Prints the name of the frontmost application.
const FRONTMOST_SCRIPT: &str = r#"tell application "System Events" to get name of first application process whose frontmost is true"#;

const FINDER_APP_NAME: &str = "Finder";

/// Selection provider backed by macOS Finder.
#[derive(Debug, Clone, Default)]
pub struct FinderSelection {
    require_frontmost: bool,
}

impl FinderSelection {
    /// Read Finder's selection regardless of which application is active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail unless Finder is the frontmost application.
    pub fn require_frontmost(mut self, require: bool) -> Self {
        self.require_frontmost = require;
        self
    }

    /// Whether the frontmost check is enabled.
    pub fn requires_frontmost(&self) -> bool {
        self.require_frontmost
    }

    async fn fetch(&self) -> Result<Vec<SelectedItem>> {
        if self.require_frontmost {
            let frontmost = run_osascript(FRONTMOST_SCRIPT).await?;
            if frontmost.trim() != FINDER_APP_NAME {
                return Err(MergeError::selection(
                    "Finder isn't the frontmost application",
                ));
            }
        }

        let output = run_osascript(SELECTION_SCRIPT).await?;
        let items = parse_finder_output(&output);
        tracing::debug!(count = items.len(), "Fetched Finder selection");
        Ok(items)
    }
}

impl SelectionProvider for FinderSelection {
    fn selected_items(&self) -> BoxFuture<'_, Result<Vec<SelectedItem>>> {
        self.fetch().boxed()
    }
}

/// Run an AppleScript snippet and return its stdout.
async fn run_osascript(script: &str) -> Result<String> {
    let output = Command::new(OSASCRIPT)
        .arg("-e")
        .arg(script)
        .output()
        .await
        .map_err(|e| MergeError::selection(format!("failed to run {OSASCRIPT}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MergeError::selection(format!(
            "{OSASCRIPT} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split the selection script's output into items.
///
/// One POSIX path per line; empty lines are ignored. Paths are not
/// trimmed beyond the line terminator since file names may carry spaces.
pub fn parse_finder_output(output: &str) -> Vec<SelectedItem> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(SelectedItem::new)
        .collect()
}
