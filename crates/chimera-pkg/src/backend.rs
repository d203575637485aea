//! A package manager bound to a command runner

use std::sync::Arc;

use chimera_exec::{CommandResult, CommandRunner, ExecError};
use tracing::{debug, info, instrument};

use crate::types::PackageManager;

/// Package manager ready to run its commands
///
/// Every operation is a single shell invocation. The exit status is reported
/// as-is; interpreting it is up to the caller.
pub struct Backend {
    manager: PackageManager,
    /// Runner used for every command
    runner: Arc<dyn CommandRunner>,
    /// Prefix for privileged commands (`pkexec`, `sudo -n`, ...)
    elevate_with: Option<String>,
}

impl Backend {
    pub fn new(manager: PackageManager, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            manager,
            runner,
            elevate_with: None,
        }
    }

    /// Prefix the check and upgrade commands with an elevation command
    ///
    /// A blank prefix is ignored.
    #[must_use]
    pub fn with_elevation(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim();
        self.elevate_with = (!prefix.is_empty()).then(|| prefix.to_string());
        self
    }

    #[must_use]
    pub fn manager(&self) -> &PackageManager {
        &self.manager
    }

    fn elevated(&self, cmd: &str) -> String {
        match &self.elevate_with {
            Some(prefix) => format!("{prefix} {cmd}"),
            None => cmd.to_string(),
        }
    }

    /// Command line run by [`Backend::check_updates`]
    #[must_use]
    pub fn check_command(&self) -> String {
        self.elevated(&self.manager.commands().check)
    }

    /// Command line run by [`Backend::count_updates`]
    #[must_use]
    pub fn count_command(&self) -> String {
        self.manager.commands().count.clone()
    }

    /// Command line run by [`Backend::upgrade`]
    #[must_use]
    pub fn upgrade_command(&self) -> String {
        self.elevated(&self.manager.commands().upgrade)
    }

    /// Refresh the package index
    ///
    /// # Errors
    /// Returns [`ExecError`] if the command could not be launched
    #[instrument(skip(self), fields(manager = %self.manager))]
    pub async fn check_updates(&self) -> Result<CommandResult, ExecError> {
        let cmd = self.check_command();
        debug!(command = %cmd, runner = self.runner.runner_type(), "refreshing package index");
        self.runner.run(&cmd).await
    }

    /// Count pending updates; stdout holds the number on success
    ///
    /// # Errors
    /// Returns [`ExecError`] if the command could not be launched
    #[instrument(skip(self), fields(manager = %self.manager))]
    pub async fn count_updates(&self) -> Result<CommandResult, ExecError> {
        let cmd = self.count_command();
        debug!(command = %cmd, runner = self.runner.runner_type(), "counting updates");
        self.runner.run(&cmd).await
    }

    /// Upgrade all packages
    ///
    /// # Errors
    /// Returns [`ExecError`] if the command could not be launched
    #[instrument(skip(self), fields(manager = %self.manager))]
    pub async fn upgrade(&self) -> Result<CommandResult, ExecError> {
        let cmd = self.upgrade_command();
        info!(command = %cmd, runner = self.runner.runner_type(), "starting upgrade");
        self.runner.run(&cmd).await
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("manager", &self.manager)
            .field("runner", &self.runner.runner_type())
            .field("elevate_with", &self.elevate_with)
            .finish()
    }
}
