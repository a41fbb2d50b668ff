//! Utilities for path expansion, extension checks and size formatting.

use crate::{Result, error::MergeError};
use std::path::{Path, PathBuf};

/// Extension (without the dot) that marks a file as a PDF.
pub const PDF_EXTENSION: &str = "pdf";

/// Whether `path` has a `.pdf` extension, compared case-insensitively.
///
/// `Report.PDF` qualifies; `notes.txt`, `archive.pdf.zip` and a bare
/// `.pdf` dotfile do not.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Patterns are expanded in the order given. An entry naming an existing
/// file is taken literally, even if it contains glob metacharacters such
/// as `scan[1].pdf`. A pattern that matches nothing is kept verbatim so
/// that a missing file surfaces later as a read error instead of silently
/// disappearing from the selection.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let pattern = pattern.as_ref();
        if Path::new(pattern).exists() {
            resolved_paths.push(PathBuf::from(pattern));
            continue;
        }

        let paths = collect_paths_for_pattern(pattern)?;
        if paths.is_empty() {
            resolved_paths.push(PathBuf::from(pattern));
        } else {
            resolved_paths.extend(paths);
        }
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"**/*.pdf"`
/// - `"./scans/*.PDF"`
fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut resolved_paths = Vec::new();

    let paths = glob::glob(pattern).map_err(|err| {
        MergeError::invalid_config(format!("Invalid glob pattern '{pattern}': {err}"))
    })?;

    for entry in paths {
        let path = entry.map_err(|err| MergeError::Read {
            path: err.path().to_path_buf(),
            source: std::io::Error::new(err.error().kind(), err.to_string()),
        })?;
        resolved_paths.push(path);
    }

    Ok(resolved_paths)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
