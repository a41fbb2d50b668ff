//! I/O operations for mergepdfs.
//!
//! This module handles the filesystem side of a merge:
//! - Reading and decoding input PDFs
//! - Writing the merged bytes to disk
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("input.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//!
//! PdfWriter::new().save(&bytes, Path::new("merged.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
