//! Outcomes reported to the front-ends

use std::fmt;

use serde::Serialize;

/// Result of checking for updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The system is up to date
    NoUpdates,
    /// `count` packages can be upgraded (always at least 1)
    UpdatesAvailable { count: u32 },
    /// A command exited non-zero
    CheckFailed { reason: String },
    /// The count command printed something that is not a number
    ParseFailed,
}

impl UpdateOutcome {
    /// Number of pending updates, if the check succeeded
    #[must_use]
    pub fn update_count(&self) -> Option<u32> {
        match self {
            Self::NoUpdates => Some(0),
            Self::UpdatesAvailable { count } => Some(*count),
            Self::CheckFailed { .. } | Self::ParseFailed => None,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.update_count().is_none()
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUpdates => write!(f, "Your system is up-to-date."),
            Self::UpdatesAvailable { count: 1 } => write!(f, "There is one update available."),
            Self::UpdatesAvailable { count } => write!(f, "There are {count} updates available."),
            Self::CheckFailed { reason } => write!(f, "{reason}"),
            Self::ParseFailed => write!(f, "Unable to parse update count"),
        }
    }
}

/// Result of applying an upgrade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpgradeOutcome {
    Completed,
    Failed {
        /// Non-zero exit status of the upgrade command
        status: i32,
        stderr: String,
    },
}

impl UpgradeOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for UpgradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Update complete! Your system is up-to-date."),
            Self::Failed { status, .. } => {
                write!(f, "Unable to perform upgrade (exit code {status})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_messages() {
        assert_eq!(UpdateOutcome::NoUpdates.to_string(), "Your system is up-to-date.");
        assert_eq!(
            UpdateOutcome::UpdatesAvailable { count: 1 }.to_string(),
            "There is one update available."
        );
        assert_eq!(
            UpdateOutcome::UpdatesAvailable { count: 12 }.to_string(),
            "There are 12 updates available."
        );
        assert_eq!(
            UpdateOutcome::ParseFailed.to_string(),
            "Unable to parse update count"
        );
    }

    #[test]
    fn test_update_count() {
        assert_eq!(UpdateOutcome::NoUpdates.update_count(), Some(0));
        assert_eq!(
            UpdateOutcome::UpdatesAvailable { count: 3 }.update_count(),
            Some(3)
        );
        assert!(UpdateOutcome::ParseFailed.is_failure());
        assert!(
            UpdateOutcome::CheckFailed {
                reason: "x".to_string()
            }
            .is_failure()
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(UpdateOutcome::UpdatesAvailable { count: 4 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "outcome": "updates_available", "count": 4 })
        );

        let json = serde_json::to_value(UpgradeOutcome::Failed {
            status: 100,
            stderr: "E: lock".to_string(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["status"], 100);
    }

    #[test]
    fn test_upgrade_messages() {
        assert_eq!(
            UpgradeOutcome::Completed.to_string(),
            "Update complete! Your system is up-to-date."
        );
        assert_eq!(
            UpgradeOutcome::Failed {
                status: 1,
                stderr: String::new()
            }
            .to_string(),
            "Unable to perform upgrade (exit code 1)"
        );
    }
}
