//! Executable probing

use tracing::debug;

/// Answers whether a tool can be found on the executable search path
pub trait ToolProbe: Send + Sync {
    fn is_available(&self, tool: &str) -> bool;
}

/// Probe backed by a `PATH` lookup, the equivalent of `which <tool>` exiting 0
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, tool: &str) -> bool {
        let found = which::which(tool);
        debug!(tool, found = found.is_ok(), "probed executable search path");
        found.is_ok()
    }
}
