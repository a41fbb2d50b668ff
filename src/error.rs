//! Error types for mergepdfs.
//!
//! Every failure in the crate is a [`MergeError`]. The driver catches the
//! first one, turns it into a single failure notification and hands it
//! back to the binary, which maps it to an exit code.
//!
//! # Error Categories
//!
//! - **Selection**: nothing usable was selected, or the host could not be asked
//! - **I/O**: an input could not be read or the output could not be written
//! - **Decode**: an input is not a valid PDF

use std::io;
use std::path::PathBuf;

/// Result type alias for mergepdfs operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Main error type for mergepdfs operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The selection contained no file with a `.pdf` extension.
    #[error("No PDF files selected")]
    NoPdfSelected,

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable input.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The merged document could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An input file is not a valid PDF.
    #[error("Failed to decode PDF {}: {reason}", .path.display())]
    Decode {
        /// Path of the malformed input.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// The selection provider failed (e.g. Finder is not frontmost).
    #[error("Could not get the current selection: {message}")]
    Selection {
        /// Description from the host.
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// The page tree of the accumulator could not be updated.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

/// Coarse classification of a [`MergeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero qualifying files after filtering.
    NoPdfSelected,
    /// Read or write failure.
    Io,
    /// Malformed PDF input.
    Decode,
    /// The host could not provide a selection.
    Selection,
    /// Bad flags or environment.
    Config,
}

impl From<anyhow::Error> for MergeError {
    fn from(err: anyhow::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl MergeError {
    /// Create a Decode error.
    pub fn decode(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::Decode {
            path,
            reason: reason.into(),
        }
    }

    /// Create a Selection error.
    pub fn selection(message: impl Into<String>) -> Self {
        Self::Selection {
            message: message.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoPdfSelected => ErrorKind::NoPdfSelected,
            Self::Read { .. } | Self::Write { .. } | Self::Io { .. } => ErrorKind::Io,
            Self::Decode { .. } | Self::MergeFailed { .. } => ErrorKind::Decode,
            Self::Selection { .. } => ErrorKind::Selection,
            Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoPdfSelected => 1,
            Self::InvalidConfig { .. } => 1,
            Self::Read { .. } => 2,
            Self::Decode { .. } => 3,
            Self::Selection { .. } => 4,
            Self::Write { .. } => 5,
            Self::Io { .. } => 5,
            Self::MergeFailed { .. } => 6,
        }
    }
}
