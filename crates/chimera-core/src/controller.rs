//! Update orchestration over a single backend

use chimera_exec::CommandResult;
use chimera_pkg::{Backend, PackageManager};
use tracing::{info, instrument, warn};

use crate::error::CoreError;
use crate::outcome::{UpdateOutcome, UpgradeOutcome};

const CHECK_FAILED: &str = "Unable to check for updates";
const COUNT_FAILED: &str = "Unable to count updates";

/// Runs check and upgrade operations for the front-ends
///
/// Owns the backend for the lifetime of the process. Operations do not retry
/// and do not run concurrently with each other on their own; callers must
/// keep at most one operation in flight because package managers lock their
/// database.
#[derive(Debug)]
pub struct UpdateController {
    backend: Backend,
}

impl UpdateController {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    #[must_use]
    pub fn manager(&self) -> &PackageManager {
        self.backend.manager()
    }

    /// Refresh the index, then count pending updates
    ///
    /// The count command only runs if the refresh succeeded.
    ///
    /// # Errors
    /// Returns [`CoreError::Execution`] if a command could not be launched
    #[instrument(skip(self), fields(manager = %self.manager()))]
    pub async fn check_for_updates(&self) -> Result<UpdateOutcome, CoreError> {
        let refresh = self.backend.check_updates().await?;
        if !refresh.success() {
            log_failure("index refresh failed", &refresh);
            return Ok(UpdateOutcome::CheckFailed {
                reason: CHECK_FAILED.to_string(),
            });
        }

        let count = self.backend.count_updates().await?;
        if !count.success() {
            log_failure("update count failed", &count);
            return Ok(UpdateOutcome::CheckFailed {
                reason: COUNT_FAILED.to_string(),
            });
        }

        let outcome = parse_update_count(&count.stdout);
        match &outcome {
            UpdateOutcome::ParseFailed => {
                warn!(stdout = %count.stdout.trim(), "update count is not a number");
            }
            other => info!(outcome = %other, "update check finished"),
        }
        Ok(outcome)
    }

    /// Upgrade all packages
    ///
    /// # Errors
    /// Returns [`CoreError::Execution`] if the upgrade could not be launched
    #[instrument(skip(self), fields(manager = %self.manager()))]
    pub async fn apply_upgrade(&self) -> Result<UpgradeOutcome, CoreError> {
        let result = self.backend.upgrade().await?;
        if !result.success() {
            log_failure("upgrade failed", &result);
            return Ok(UpgradeOutcome::Failed {
                status: result.status,
                stderr: result.stderr,
            });
        }

        info!(duration = ?result.duration, "upgrade completed");
        Ok(UpgradeOutcome::Completed)
    }
}

fn log_failure(what: &str, result: &CommandResult) {
    warn!(status = result.status, stderr = %result.stderr.trim(), "{what}");
}

/// Interpret the stdout of a count command
///
/// Surrounding whitespace is ignored. Anything but a non-negative base-10
/// integer is a parse failure.
#[must_use]
pub fn parse_update_count(stdout: &str) -> UpdateOutcome {
    match stdout.trim().parse::<u32>() {
        Ok(0) => UpdateOutcome::NoUpdates,
        Ok(count) => UpdateOutcome::UpdatesAvailable { count },
        Err(_) => UpdateOutcome::ParseFailed,
    }
}
