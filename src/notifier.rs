//! Desktop notifications through the host's notification command.

use crate::config::BOT_NAME;
use crate::message::Message;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

pub trait Notifier {
    fn notify(&self, message: &Message);
}

/// Chooses the notifier once. Without a notification command on the host
/// notifications are silently skipped.
pub fn detect(enabled: bool) -> Box<dyn Notifier> {
    if !enabled {
        return Box::new(NoopNotifier);
    }

    match DesktopNotifier::detect() {
        Some(notifier) => {
            debug!("Desktop notifications via {}", notifier.program.display());
            Box::new(notifier)
        }
        None => {
            debug!("No notification command found, notifications disabled");
            Box::new(NoopNotifier)
        }
    }
}

pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &Message) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    NotifySend,
    Osascript,
}

pub struct DesktopNotifier {
    program: PathBuf,
    backend: Backend,
}

impl DesktopNotifier {
    pub fn detect() -> Option<Self> {
        let backend = if cfg!(target_os = "macos") {
            Backend::Osascript
        } else if cfg!(target_os = "linux") {
            Backend::NotifySend
        } else {
            return None;
        };

        let name = match backend {
            Backend::NotifySend => "notify-send",
            Backend::Osascript => "osascript",
        };
        let program = which::which(name).ok()?;
        Some(Self { program, backend })
    }

    /// Arguments for the notification command; the message is never passed
    /// through a shell.
    pub fn args(backend: Backend, text: &str) -> Vec<String> {
        match backend {
            Backend::NotifySend => vec![BOT_NAME.to_string(), text.to_string()],
            Backend::Osascript => vec![
                "-e".to_string(),
                format!(
                    "display notification {} with title {}",
                    applescript_string(text),
                    applescript_string(BOT_NAME)
                ),
            ],
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &Message) {
        let status = Command::new(&self.program)
            .args(Self::args(self.backend, &message.text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("{} exited with {}", self.program.display(), status),
            Err(e) => warn!("Failed to run {}: {}", self.program.display(), e),
        }
    }
}

fn applescript_string(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_send_args() {
        let args = DesktopNotifier::args(Backend::NotifySend, "Ship it; don't wait.");
        assert_eq!(args, vec!["m0tive", "Ship it; don't wait."]);
    }

    #[test]
    fn test_osascript_escapes_quotes() {
        let args = DesktopNotifier::args(Backend::Osascript, r#"Say "yes" \ now"#);
        assert_eq!(args[0], "-e");
        assert_eq!(
            args[1],
            r#"display notification "Say \"yes\" \\ now" with title "m0tive""#
        );
    }

    #[test]
    fn test_disabled_notifier_is_noop() {
        let notifier = detect(false);
        let message = Message::new(
            "quiet",
            crate::message::MessageKind::Fixed,
            crate::catalog::Language::English,
        );
        notifier.notify(&message);
    }
}
