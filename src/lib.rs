//! mergepdfs - merge the selected PDF files into a single document.
//!
//! The crate is organised around one workflow, [`command::MergeCommand`]:
//! take a selection, keep its PDFs, concatenate their pages in order, write
//! `merged.pdf` and report the outcome. Selection and reporting are
//! injected through the [`selection::SelectionProvider`] and
//! [`notify::NotificationSink`] traits.
//!
//! # Examples
//!
//! ```no_run
//! use mergepdfs::command::MergeCommand;
//! use mergepdfs::notify::ConsoleNotifier;
//! use mergepdfs::selection::StaticSelection;
//!
//! # async fn example() -> mergepdfs::Result<()> {
//! let selection = StaticSelection::new(["/docs/a.pdf", "/docs/b.pdf"]);
//! let report = MergeCommand::new()
//!     .run(&selection, &ConsoleNotifier::default())
//!     .await?;
//! assert_eq!(report.output_path, std::path::PathBuf::from("/docs/merged.pdf"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod notify;
pub mod output;
pub mod selection;
pub mod utils;

pub use command::{MergeCommand, MergeReport};
pub use error::{ErrorKind, MergeError, Result};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
