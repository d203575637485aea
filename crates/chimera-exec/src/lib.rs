//! chimera-exec: Local command execution
//!
//! Provides the command runner seam used by package-manager backends, a
//! shell-backed local implementation and executable probing on `PATH`.

pub mod error;
pub mod local;
pub mod probe;
pub mod result;
pub mod traits;

pub use error::ExecError;
pub use local::LocalRunner;
pub use probe::{PathProbe, ToolProbe};
pub use result::CommandResult;
pub use traits::CommandRunner;
