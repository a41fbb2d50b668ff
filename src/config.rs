//! Configuration module for mergepdfs.
//!
//! Turns command-line arguments into a validated [`Config`] and builds the
//! selection provider and notification sink the run will use.

use anyhow::{Result, bail};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::MergeError;
use crate::merge::MergeOptions;
use crate::notify::{ConsoleNotifier, DesktopNotifier, NotificationSink, Notifiers};
use crate::output::OutputFormatter;
use crate::selection::{FinderSelection, ListFileSelection, SelectionProvider, StaticSelection};

/// Where the selection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// The current Finder selection.
    Finder {
        /// Fail unless Finder is the frontmost application.
        require_frontmost: bool,
    },
    /// Paths or glob patterns given directly.
    Paths(Vec<String>),
    /// A file listing one path per line (`-` for stdin).
    InputList(PathBuf),
}

impl Default for SelectionSource {
    fn default() -> Self {
        Self::Finder {
            require_frontmost: false,
        }
    }
}

/// Where outcome notifications are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyTarget {
    /// Print to the terminal.
    #[default]
    Console,
    /// Native desktop notification.
    Desktop,
    /// Both.
    All,
}

impl FromStr for NotifyTarget {
    type Err = MergeError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "desktop" => Ok(Self::Desktop),
            "all" => Ok(Self::All),
            _ => Err(MergeError::invalid_config(format!(
                "Invalid notification target: {s}. Must be one of: console, desktop, all"
            ))),
        }
    }
}

impl NotifyTarget {
    fn console(self) -> bool {
        matches!(self, Self::Console | Self::All)
    }

    fn desktop(self) -> bool {
        matches!(self, Self::Desktop | Self::All)
    }
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selection source.
    pub source: SelectionSource,

    /// Notification target.
    pub notify: NotifyTarget,

    /// Compress streams in the merged document.
    pub compress: bool,

    /// Show per-file details and debug logging.
    pub verbose: bool,

    /// Only print failures.
    pub quiet: bool,

    /// Print the run report as JSON on stdout.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SelectionSource::default(),
            notify: NotifyTarget::default(),
            compress: true,
            verbose: false,
            quiet: false,
            json: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both verbose and quiet are set
    /// - An explicit path list is empty
    /// - The input list path is empty
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        match &self.source {
            SelectionSource::Paths(paths) if paths.is_empty() => {
                bail!("No input files specified");
            }
            SelectionSource::Paths(paths) => {
                if let Some(pos) = paths.iter().position(|p| p.trim().is_empty()) {
                    bail!("Input path #{} is empty", pos + 1);
                }
            }
            SelectionSource::InputList(list) if list.as_os_str().is_empty() => {
                bail!("Input list path cannot be empty");
            }
            _ => {}
        }

        Ok(())
    }

    /// Merge options derived from this configuration.
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            compress: self.compress,
        }
    }

    /// Console formatter honouring the verbosity flags.
    ///
    /// In JSON mode the success line is suppressed so stdout carries only
    /// the report.
    pub fn formatter(&self) -> OutputFormatter {
        OutputFormatter::new(self.quiet || self.json, self.verbose)
    }

    /// Build the selection provider for [`Config::source`].
    pub fn selection_provider(&self) -> Box<dyn SelectionProvider> {
        match &self.source {
            SelectionSource::Finder { require_frontmost } => {
                Box::new(FinderSelection::new().require_frontmost(*require_frontmost))
            }
            SelectionSource::Paths(paths) => Box::new(StaticSelection::new(paths.clone())),
            SelectionSource::InputList(list) => Box::new(ListFileSelection::new(list.clone())),
        }
    }

    /// Build the notification sink for [`Config::notify`].
    pub fn notification_sink(&self) -> Box<dyn NotificationSink> {
        let mut sinks = Notifiers::new();
        if self.notify.console() {
            sinks.push(Box::new(ConsoleNotifier::new(self.formatter())));
        }
        if self.notify.desktop() {
            sinks.push(Box::new(DesktopNotifier::new()));
        }
        Box::new(sinks)
    }

    /// Check if output should be printed.
    pub fn should_print(&self) -> bool {
        !self.quiet && !self.json
    }
}
