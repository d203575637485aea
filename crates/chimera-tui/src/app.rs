//! Application state and logic

use std::collections::VecDeque;
use std::sync::Arc;

use chimera_core::{UpdateController, UpdateOutcome, UpgradeOutcome};
use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::action::Action;
use crate::notify::{self, Notifier};

pub const STATUS_READY: &str = "Updates: Ready...";
pub const STATUS_CHECKING: &str = "Updates: Checking...";
pub const STATUS_INSTALLING: &str = "Updates: Installing...";
pub const STATUS_UPGRADED: &str = "Updates: Update Complete!";
pub const STATUS_QUIT_PENDING: &str = "Updates: Installing... (quitting when done)";
const UPGRADE_FAILED: &str = "Unable to perform upgrade";

const EVENT_LOG_CAPACITY: usize = 100;

/// Operation currently running on the worker task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Checking,
    Upgrading,
}

/// The three buttons of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    Check,
    Install,
    Quit,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Check, Button::Install, Button::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Button::Check => "Check for updates",
            Button::Install => "Install Updates",
            Button::Quit => "Quit",
        }
    }

    fn next(self) -> Self {
        match self {
            Button::Check => Button::Install,
            Button::Install => Button::Quit,
            Button::Quit => Button::Check,
        }
    }

    fn prev(self) -> Self {
        match self {
            Button::Check => Button::Quit,
            Button::Install => Button::Check,
            Button::Quit => Button::Install,
        }
    }
}

/// Event log entry
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: EventLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Application state
pub struct App {
    /// Controller shared with worker tasks
    controller: Arc<UpdateController>,
    /// Desktop notifications
    notifier: Notifier,
    /// Channel back into the UI loop for worker results
    actions: mpsc::UnboundedSender<Action>,
    /// Should quit
    should_quit: bool,
    /// Quit requested while an upgrade was running
    quit_pending: bool,
    /// Status line shown under the title
    pub status: String,
    /// Running operation, if any
    pub activity: Activity,
    /// Whether "Install Updates" can be pressed
    pub install_enabled: bool,
    /// Focused button
    pub focused: Button,
    /// Event log
    pub event_log: VecDeque<EventLogEntry>,
    /// Show help popup
    pub show_help: bool,
    /// Tick counter for animations
    pub tick: u64,
}

impl App {
    /// Create a new application
    pub fn new(
        controller: Arc<UpdateController>,
        notifier: Notifier,
        actions: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let mut app = Self {
            controller,
            notifier,
            actions,
            should_quit: false,
            quit_pending: false,
            status: STATUS_READY.to_string(),
            activity: Activity::Idle,
            install_enabled: false,
            focused: Button::Check,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            show_help: false,
            tick: 0,
        };
        let manager = app.controller.manager().to_string();
        app.log_event(&format!("Using {manager}"), EventLevel::Info);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Name of the active package manager
    pub fn manager_name(&self) -> String {
        self.controller.manager().to_string()
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Whether a button currently reacts to presses
    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Check => !self.is_busy(),
            Button::Install => !self.is_busy() && self.install_enabled,
            Button::Quit => self.activity != Activity::Upgrading,
        }
    }

    /// Log an event
    fn log_event(&mut self, message: &str, level: EventLevel) {
        let entry = EventLogEntry {
            timestamp: Local::now(),
            message: message.to_string(),
            level,
        };
        self.event_log.push_front(entry);
        if self.event_log.len() > EVENT_LOG_CAPACITY {
            self.event_log.pop_back();
        }
    }

    /// Handle an action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.request_quit(),
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::FocusNext => {
                self.focused = self.focused.next();
            }
            Action::FocusPrev => {
                self.focused = self.focused.prev();
            }
            Action::Press => match self.focused {
                Button::Check => self.start_check(),
                Button::Install => self.start_upgrade(),
                Button::Quit => self.request_quit(),
            },
            Action::CheckUpdates => self.start_check(),
            Action::InstallUpdates => self.start_upgrade(),
            Action::Help => {
                self.show_help = !self.show_help;
            }
            Action::Back => {
                self.show_help = false;
            }
            Action::CheckFinished(result) => self.finish_check(result),
            Action::UpgradeFinished(result) => self.finish_upgrade(result),
            Action::Render | Action::None => {}
        }
    }

    /// Quit now, or once the running upgrade has finished
    ///
    /// Leaving mid-upgrade would orphan the package manager with its output
    /// pipes closed.
    fn request_quit(&mut self) {
        if self.activity != Activity::Upgrading {
            self.should_quit = true;
            return;
        }
        if !self.quit_pending {
            self.quit_pending = true;
            self.status = STATUS_QUIT_PENDING.to_string();
            self.log_event(
                "Quit requested, waiting for the upgrade to finish",
                EventLevel::Warning,
            );
        }
    }

    /// Run the update check on a worker task
    fn start_check(&mut self) {
        if !self.is_enabled(Button::Check) {
            debug!(activity = ?self.activity, "ignoring check request");
            return;
        }

        self.activity = Activity::Checking;
        self.install_enabled = false;
        self.status = STATUS_CHECKING.to_string();
        self.log_event("Checking for updates", EventLevel::Info);

        let controller = Arc::clone(&self.controller);
        let actions = self.actions.clone();
        tokio::spawn(async move {
            let result = controller
                .check_for_updates()
                .await
                .map_err(|e| e.to_string());
            // The receiver is gone only when the UI has quit.
            let _ = actions.send(Action::CheckFinished(result));
        });
    }

    /// Run the upgrade on a worker task
    fn start_upgrade(&mut self) {
        if !self.is_enabled(Button::Install) {
            debug!(activity = ?self.activity, "ignoring upgrade request");
            return;
        }

        self.activity = Activity::Upgrading;
        self.status = STATUS_INSTALLING.to_string();
        self.log_event("Installing updates", EventLevel::Info);

        let controller = Arc::clone(&self.controller);
        let actions = self.actions.clone();
        tokio::spawn(async move {
            let result = controller.apply_upgrade().await.map_err(|e| e.to_string());
            let _ = actions.send(Action::UpgradeFinished(result));
        });
    }

    fn finish_check(&mut self, result: Result<UpdateOutcome, String>) {
        self.activity = Activity::Idle;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(message) => return self.show_error(&message),
        };
        let Some(count) = outcome.update_count() else {
            return self.show_error(&outcome.to_string());
        };

        info!(%outcome, "update check finished");
        let message = outcome.to_string();
        self.status = format!("Updates: {message}");
        self.install_enabled = count > 0;
        let level = if count > 0 {
            EventLevel::Success
        } else {
            EventLevel::Info
        };
        self.log_event(&message, level);
        self.notifier.send(notify::TITLE, &message, false);
    }

    fn finish_upgrade(&mut self, result: Result<UpgradeOutcome, String>) {
        self.activity = Activity::Idle;

        match result {
            Ok(UpgradeOutcome::Completed) => {
                let message = UpgradeOutcome::Completed.to_string();
                self.status = STATUS_UPGRADED.to_string();
                self.install_enabled = false;
                self.log_event(&message, EventLevel::Success);
                self.notifier.send(notify::TITLE, &message, false);
            }
            Ok(failed @ UpgradeOutcome::Failed { .. }) => {
                self.log_event(&failed.to_string(), EventLevel::Warning);
                self.show_error(UPGRADE_FAILED);
            }
            Err(message) => self.show_error(&message),
        }

        if self.quit_pending {
            info!("upgrade finished, quitting");
            self.should_quit = true;
        }
    }

    fn show_error(&mut self, message: &str) {
        self.status = format!("Error: {message}");
        self.log_event(message, EventLevel::Error);
        self.notifier.send(notify::ERROR_TITLE, message, true);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chimera_exec::{CommandResult, CommandRunner, ExecError};
    use chimera_pkg::{Backend, PackageManager};

    use super::*;

    struct FakeRunner(HashMap<&'static str, CommandResult>);

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError> {
            self.0.get(cmd).cloned().ok_or_else(|| ExecError::Spawn {
                command: cmd.to_string(),
                cause: "not found".to_string(),
            })
        }

        fn runner_type(&self) -> &'static str {
            "fake"
        }
    }

    fn app(replies: &[(&'static str, i32, &str)]) -> (App, mpsc::UnboundedReceiver<Action>) {
        let runner = FakeRunner(
            replies
                .iter()
                .map(|(cmd, status, out)| (*cmd, CommandResult::new(*status, *out, "")))
                .collect(),
        );
        let backend = Backend::new(PackageManager::dnf(), Arc::new(runner));
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            Arc::new(UpdateController::new(backend)),
            Notifier::new(false),
            tx,
        );
        (app, rx)
    }

    async fn settle(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Action>) {
        let action = rx.recv().await.unwrap();
        app.handle_action(action);
    }

    #[test]
    fn test_initial_state() {
        let (app, _rx) = app(&[]);

        assert_eq!(app.status, STATUS_READY);
        assert!(app.is_enabled(Button::Check));
        assert!(!app.is_enabled(Button::Install));
        assert_eq!(app.manager_name(), "dnf");
    }

    #[test]
    fn test_focus_wraps() {
        let (mut app, _rx) = app(&[]);

        app.handle_action(Action::FocusPrev);
        assert_eq!(app.focused, Button::Quit);
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focused, Button::Check);
    }

    #[tokio::test]
    async fn test_check_enables_install() {
        let (mut app, mut rx) = app(&[
            ("dnf check-update", 0, ""),
            ("dnf check-update | grep -v '^$' | wc -l", 0, "3\n"),
        ]);

        app.handle_action(Action::CheckUpdates);
        assert_eq!(app.activity, Activity::Checking);
        assert_eq!(app.status, STATUS_CHECKING);

        // A second request while busy is ignored.
        app.handle_action(Action::CheckUpdates);

        settle(&mut app, &mut rx).await;
        assert_eq!(app.activity, Activity::Idle);
        assert_eq!(app.status, "Updates: There are 3 updates available.");
        assert!(app.is_enabled(Button::Install));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_check_up_to_date() {
        let (mut app, mut rx) = app(&[
            ("dnf check-update", 0, ""),
            ("dnf check-update | grep -v '^$' | wc -l", 0, "0"),
        ]);

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;

        assert_eq!(app.status, "Updates: Your system is up-to-date.");
        assert!(!app.is_enabled(Button::Install));
    }

    #[tokio::test]
    async fn test_check_failure_shows_error() {
        let (mut app, mut rx) = app(&[("dnf check-update", 1, "")]);

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;

        assert_eq!(app.status, "Error: Unable to check for updates");
        assert_eq!(app.event_log[0].level, EventLevel::Error);
        assert!(app.is_enabled(Button::Check));
    }

    #[tokio::test]
    async fn test_launch_failure_shows_error() {
        let (mut app, mut rx) = app(&[]);

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;

        assert!(app.status.starts_with("Error: failed to run command `dnf check-update`"));
    }

    #[tokio::test]
    async fn test_upgrade_flow() {
        let (mut app, mut rx) = app(&[
            ("dnf check-update", 0, ""),
            ("dnf check-update | grep -v '^$' | wc -l", 0, "1"),
            ("dnf upgrade", 0, ""),
        ]);

        app.handle_action(Action::InstallUpdates);
        assert_eq!(app.activity, Activity::Idle, "install is disabled before a check");

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;

        app.focused = Button::Install;
        app.handle_action(Action::Press);
        assert_eq!(app.activity, Activity::Upgrading);
        assert!(!app.is_enabled(Button::Check));

        settle(&mut app, &mut rx).await;
        assert_eq!(app.status, STATUS_UPGRADED);
        assert!(!app.is_enabled(Button::Install));
    }

    #[tokio::test]
    async fn test_quit_waits_for_upgrade() {
        let (mut app, mut rx) = app(&[
            ("dnf check-update", 0, ""),
            ("dnf check-update | grep -v '^$' | wc -l", 0, "1"),
            ("dnf upgrade", 0, ""),
        ]);

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;
        app.handle_action(Action::InstallUpdates);
        assert!(!app.is_enabled(Button::Quit));

        app.handle_action(Action::Quit);
        app.focused = Button::Quit;
        app.handle_action(Action::Press);
        assert!(!app.should_quit());
        assert_eq!(app.activity, Activity::Upgrading);
        assert_eq!(app.status, STATUS_QUIT_PENDING);
        assert_eq!(app.event_log[0].level, EventLevel::Warning);

        settle(&mut app, &mut rx).await;
        assert!(app.should_quit());
        assert_eq!(app.activity, Activity::Idle);
    }

    #[tokio::test]
    async fn test_quit_while_checking_is_immediate() {
        let (mut app, _rx) = app(&[("dnf check-update", 0, "")]);

        app.handle_action(Action::CheckUpdates);
        app.handle_action(Action::Quit);

        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_upgrade_failure() {
        let (mut app, mut rx) = app(&[
            ("dnf check-update", 0, ""),
            ("dnf check-update | grep -v '^$' | wc -l", 0, "2"),
            ("dnf upgrade", 1, ""),
        ]);

        app.handle_action(Action::CheckUpdates);
        settle(&mut app, &mut rx).await;
        app.handle_action(Action::InstallUpdates);
        settle(&mut app, &mut rx).await;

        assert_eq!(app.status, "Error: Unable to perform upgrade");
        assert!(app.is_enabled(Button::Install));
    }
}
