//! PDF reading and decoding.
//!
//! Reading and decoding are two separate steps so that the two failure
//! modes stay distinct: a file that cannot be read is a
//! [`MergeError::Read`], bytes that are not a PDF are a
//! [`MergeError::Decode`].
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::io::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("a.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergeError, Result};

/// A decoded PDF document with the facts the merge reports on.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to read and decode the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Reads PDF files from disk and decodes them with `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Read and decode a single PDF document.
    ///
    /// A document with zero pages is returned as-is; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Read`] if the file cannot be read (missing,
    /// permission denied, a directory) and [`MergeError::Decode`] if its
    /// bytes are not a valid PDF.
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();

        let bytes = tokio::fs::read(path).await.map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_size = bytes.len() as u64;

        let document = Self::decode(path, &bytes)?;
        let page_count = document.get_pages().len();

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
            file_size,
        })
    }

    /// Decode an in-memory PDF. `path` is only used for error reporting.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Document> {
        Document::load_mem(bytes)
            .map_err(|err| MergeError::decode(path.to_path_buf(), err.to_string()))
    }
}
