//! Reporting the outcome of a merge to the user.
//!
//! The driver builds a [`Toast`] and hands it to a [`NotificationSink`].
//! Sinks are fire-and-forget: they never fail, and a sink that cannot
//! deliver a toast logs the problem and moves on.

pub mod console;
pub mod desktop;

pub use console::ConsoleNotifier;
pub use desktop::DesktopNotifier;

use serde::Serialize;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToastStyle {
    /// The merge completed.
    Success,
    /// The merge did not produce an output file.
    Failure,
}

/// A short user-facing message about the outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Success or failure.
    pub style: ToastStyle,
    /// Headline.
    pub title: String,
    /// Optional detail line.
    pub message: Option<String>,
}

impl Toast {
    /// A success toast with no message.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Success,
            title: title.into(),
            message: None,
        }
    }

    /// A failure toast with no message.
    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Failure,
            title: title.into(),
            message: None,
        }
    }

    /// Attach a detail line.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether this toast reports a failure.
    pub fn is_failure(&self) -> bool {
        self.style == ToastStyle::Failure
    }
}

/// Something that can display a [`Toast`].
pub trait NotificationSink: Send + Sync {
    /// Display `toast`. Must not block for long and must not fail.
    fn show(&self, toast: &Toast);
}

/// Sends every toast to several sinks, in order.
#[derive(Default)]
pub struct Notifiers {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Notifiers {
    /// Create an empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Add a boxed sink.
    pub fn push(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Number of sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl NotificationSink for Notifiers {
    fn show(&self, toast: &Toast) {
        for sink in &self.sinks {
            sink.show(toast);
        }
    }
}

impl std::fmt::Debug for Notifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifiers")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
