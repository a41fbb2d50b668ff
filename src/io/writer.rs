//! Writing the merged PDF to disk.
//!
//! The writer is handed finished bytes; it never touches a
//! [`lopdf::Document`]. It provides:
//! - Atomic writes (write to a temp file next to the target, then rename)
//! - Creation of missing parent directories
//! - Write statistics
//!
//! An existing file at the destination is replaced without asking.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergeError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Create the destination's parent directories if they are missing.
    pub create_dirs: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            create_dirs: true,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone, Serialize)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Writes serialized PDF bytes to a destination path.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Write `bytes` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Write`] if the parent directory cannot be
    /// created, the file cannot be written (permission denied, disk full),
    /// or the final rename fails.
    pub async fn save(&self, bytes: &[u8], path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();
        let write_err = |source| MergeError::Write {
            path: path.to_path_buf(),
            source,
        };

        if self.options.create_dirs
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        if self.options.atomic {
            let temp_path = Self::temp_path(path);
            if let Err(source) = tokio::fs::write(&temp_path, bytes).await {
                let _ = tokio::fs::remove_file(&temp_path).await;
                return Err(write_err(source));
            }
            if let Err(source) = tokio::fs::rename(&temp_path, path).await {
                let _ = tokio::fs::remove_file(&temp_path).await;
                return Err(write_err(source));
            }
        } else {
            tokio::fs::write(path, bytes).await.map_err(write_err)?;
        }

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote merged PDF");

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size: bytes.len() as u64,
            output_path: path.to_path_buf(),
        })
    }

    /// Hidden sibling used for atomic writes, e.g. `.merged.pdf.part`.
    fn temp_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        path.with_file_name(format!(".{name}.part"))
    }
}
