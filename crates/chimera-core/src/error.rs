//! Core error types for chimera-core

use chimera_exec::ExecError;
use chimera_pkg::ResolveError;
use thiserror::Error;

/// Errors that can occur in core operations
///
/// Failed checks and upgrades are not errors; they come back as
/// [`UpdateOutcome`](crate::outcome::UpdateOutcome) and
/// [`UpgradeOutcome`](crate::outcome::UpgradeOutcome) values.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A package manager command could not be launched
    #[error(transparent)]
    Execution(#[from] ExecError),

    /// No package manager could be chosen at startup
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
