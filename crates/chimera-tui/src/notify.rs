//! Desktop notifications through `notify-send`

use tokio::process::Command;
use tracing::{debug, error};

pub const TITLE: &str = "Chimera Update";
pub const ERROR_TITLE: &str = "Chimera Update Error";

/// Sends desktop notifications without blocking the UI loop
#[derive(Debug, Clone)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Arguments passed to `notify-send`
    fn args(title: &str, message: &str, urgent: bool) -> Vec<String> {
        let mut args = vec![title.to_string(), message.to_string()];
        if urgent {
            args.extend(["-u".to_string(), "critical".to_string()]);
        }
        args
    }

    /// Fire a notification on a background task
    ///
    /// Failures are logged and otherwise ignored.
    pub fn send(&self, title: &str, message: &str, urgent: bool) {
        if !self.is_enabled() {
            return;
        }

        let args = Self::args(title, message, urgent);
        tokio::spawn(async move {
            debug!(?args, "sending notification");
            match Command::new("notify-send").args(&args).status().await {
                Ok(status) if status.success() => {}
                Ok(status) => error!(?status, "notify-send failed"),
                Err(e) => error!(error = %e, "failed to run notify-send"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        assert_eq!(
            Notifier::args(TITLE, "There is one update available.", false),
            ["Chimera Update", "There is one update available."]
        );
        assert_eq!(
            Notifier::args(ERROR_TITLE, "Unable to check for updates", true),
            [
                "Chimera Update Error",
                "Unable to check for updates",
                "-u",
                "critical"
            ]
        );
    }

    #[test]
    fn test_disabled_sends_nothing() {
        let notifier = Notifier::new(false);
        assert!(!notifier.is_enabled());
        assert!(Notifier::new(true).is_enabled());

        // No runtime here: spawning would panic if the notifier tried to send.
        notifier.send(TITLE, "hello", false);
    }
}
