//! Native desktop notifications.
//!
//! macOS gets `osascript -e 'display notification ...'`; other platforms
//! get `notify-send`. The helper process is spawned and not waited on.

use std::process::{Command, Stdio};

use super::{NotificationSink, Toast};

/// Application name shown as the notification's title on macOS.
pub const APP_NAME: &str = "mergepdfs";

/// Which notification helper to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopBackend {
    /// `osascript` (macOS).
    AppleScript,
    /// `notify-send` (freedesktop).
    NotifySend,
}

impl DesktopBackend {
    /// The backend for the platform this binary was built for.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Self::AppleScript
        } else {
            Self::NotifySend
        }
    }
}

/// Shows toasts as desktop notifications.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    backend: DesktopBackend,
}

impl DesktopNotifier {
    /// Create a notifier using the platform's native backend.
    pub fn new() -> Self {
        Self::with_backend(DesktopBackend::native())
    }

    /// Create a notifier using a specific backend.
    pub fn with_backend(backend: DesktopBackend) -> Self {
        Self { backend }
    }

    /// Build the helper command that displays `toast`.
    pub fn command(&self, toast: &Toast) -> Command {
        match self.backend {
            DesktopBackend::AppleScript => {
                let mut script = format!(
                    "display notification \"{}\" with title \"{}\" subtitle \"{}\"",
                    escape_applescript(toast.message.as_deref().unwrap_or_default()),
                    APP_NAME,
                    escape_applescript(&toast.title),
                );
                if toast.is_failure() {
                    script.push_str(" sound name \"Basso\"");
                }

                let mut command = Command::new("osascript");
                command.arg("-e").arg(script);
                command
            }
            DesktopBackend::NotifySend => {
                let mut command = Command::new("notify-send");
                command.arg("--app-name").arg(APP_NAME);
                if toast.is_failure() {
                    command.arg("--urgency").arg("critical");
                }
                command.arg(&toast.title);
                if let Some(message) = &toast.message {
                    command.arg(message);
                }
                command
            }
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for DesktopNotifier {
    fn show(&self, toast: &Toast) {
        let mut command = self.command(toast);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        if let Err(e) = command.spawn() {
            tracing::warn!(
                program = ?command.get_program(),
                error = %e,
                "Failed to show desktop notification"
            );
        }
    }
}

/// Escape `text` for use inside an AppleScript string literal.
fn escape_applescript(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}
