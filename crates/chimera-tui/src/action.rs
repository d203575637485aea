//! User actions for the TUI application

use chimera_core::{UpdateOutcome, UpgradeOutcome};

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Tick event for animations/timers
    Tick,
    /// Render the UI
    Render,
    /// Move button focus right
    FocusNext,
    /// Move button focus left
    FocusPrev,
    /// Press the focused button
    Press,
    /// Start an update check
    CheckUpdates,
    /// Start the upgrade
    InstallUpdates,
    /// Show help popup
    Help,
    /// Close popup
    Back,
    /// Update check finished on the worker task
    CheckFinished(Result<UpdateOutcome, String>),
    /// Upgrade finished on the worker task
    UpgradeFinished(Result<UpgradeOutcome, String>),
    /// No action
    None,
}
