//! chimera-pkg: Package manager abstraction
//!
//! Provides the supported package-manager backends (apt, nala, dnf, pacman),
//! distribution detection from `/etc/os-release` and the resolver that picks
//! the preferred backend installed on this machine.

pub mod backend;
pub mod distro;
pub mod error;
pub mod resolver;
pub mod types;

pub use backend::Backend;
pub use distro::{DistroId, OS_RELEASE_PATH};
pub use error::ResolveError;
pub use resolver::{Candidate, DistroResolver, candidates_for, supported_distros};
pub use types::{CommandSet, PackageManager};
