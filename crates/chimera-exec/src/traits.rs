//! Command runner trait

use async_trait::async_trait;

use crate::error::ExecError;
use crate::result::CommandResult;

/// Executes a single shell command line and captures its output
///
/// Implementations must return `Ok` for every command that was launched,
/// whatever its exit status; `Err` is reserved for launch and I/O failures.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` through the system shell
    async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError>;

    /// Short name of the runner, used in logs
    fn runner_type(&self) -> &'static str;
}
