//! Error types for chimera-exec

use thiserror::Error;

/// Errors that prevent a command from producing a [`CommandResult`]
///
/// A command that runs and exits non-zero is *not* an error; it is reported
/// through [`CommandResult::status`].
///
/// [`CommandResult`]: crate::result::CommandResult
/// [`CommandResult::status`]: crate::result::CommandResult::status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The shell could not be launched
    #[error("failed to run command `{command}`: {cause}")]
    Spawn {
        /// Command line that was being launched
        command: String,
        /// Underlying OS error
        cause: String,
    },

    /// The child was launched but its output could not be collected
    #[error("I/O error while running `{command}`: {cause}")]
    Io {
        /// Command line that was running
        command: String,
        /// Underlying OS error
        cause: String,
    },
}

impl ExecError {
    /// Command line the error refers to
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            ExecError::Spawn { command, .. } | ExecError::Io { command, .. } => command,
        }
    }
}
