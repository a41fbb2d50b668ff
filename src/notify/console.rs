//! Toasts printed on the terminal.

use super::{NotificationSink, Toast, ToastStyle};
use crate::output::OutputFormatter;

/// Prints toasts through an [`OutputFormatter`].
///
/// Success toasts are silenced in quiet mode; failures always print, on
/// stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    formatter: OutputFormatter,
}

impl ConsoleNotifier {
    /// Create a notifier printing through `formatter`.
    pub fn new(formatter: OutputFormatter) -> Self {
        Self { formatter }
    }

    /// The single line printed for `toast`, before prefix and colour.
    pub fn line(toast: &Toast) -> String {
        match (&toast.message, toast.style) {
            (None, _) => toast.title.clone(),
            (Some(message), ToastStyle::Success) => format!("{} {message}", toast.title),
            (Some(message), ToastStyle::Failure) => format!("{}: {message}", toast.title),
        }
    }
}

impl NotificationSink for ConsoleNotifier {
    fn show(&self, toast: &Toast) {
        let line = Self::line(toast);
        match toast.style {
            ToastStyle::Success => self.formatter.success(&line),
            ToastStyle::Failure => self.formatter.error(&line),
        }
    }
}
