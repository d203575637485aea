//! Package manager selection for the running distribution

use std::path::PathBuf;

use chimera_exec::{PathProbe, ToolProbe};
use tracing::{debug, info, instrument, warn};

use crate::distro::{DistroId, OS_RELEASE_PATH};
use crate::error::ResolveError;
use crate::types::PackageManager;

/// A tool whose presence selects a backend
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Binary probed on `PATH`
    pub tool: &'static str,
    /// Builds the backend once the tool is found
    pub build: fn() -> PackageManager,
}

const DEBIAN_FAMILY: &[Candidate] = &[
    Candidate {
        tool: "nala",
        build: PackageManager::nala,
    },
    Candidate {
        tool: "apt",
        build: PackageManager::apt,
    },
];

const FEDORA_FAMILY: &[Candidate] = &[Candidate {
    tool: "dnf",
    build: PackageManager::dnf,
}];

const ARCH_FAMILY: &[Candidate] = &[Candidate {
    tool: "pacman",
    build: PackageManager::pacman,
}];

/// Supported distros and their candidates, in preference order
const SUPPORTED: &[(&str, &[Candidate])] = &[
    ("debian", DEBIAN_FAMILY),
    ("ubuntu", DEBIAN_FAMILY),
    ("fedora", FEDORA_FAMILY),
    ("arch", ARCH_FAMILY),
    ("arcolinux", ARCH_FAMILY),
];

/// Candidates for a distro, or `None` if it is unsupported
#[must_use]
pub fn candidates_for(distro: &DistroId) -> Option<&'static [Candidate]> {
    SUPPORTED
        .iter()
        .find(|(id, _)| *id == distro.as_str())
        .map(|(_, candidates)| *candidates)
}

/// Ids of all supported distros
pub fn supported_distros() -> impl Iterator<Item = &'static str> {
    SUPPORTED.iter().map(|(id, _)| *id)
}

/// Picks the package manager for this machine
///
/// Reads the distro id from the os-release file, then returns the first
/// candidate of that distro whose tool is installed.
#[derive(Debug, Clone)]
pub struct DistroResolver<P = PathProbe> {
    os_release: PathBuf,
    probe: P,
}

impl DistroResolver<PathProbe> {
    /// Resolver reading `/etc/os-release` and probing `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self {
            os_release: PathBuf::from(OS_RELEASE_PATH),
            probe: PathProbe,
        }
    }
}

impl Default for DistroResolver<PathProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ToolProbe> DistroResolver<P> {
    /// Read a different release file
    #[must_use]
    pub fn with_os_release(mut self, path: impl Into<PathBuf>) -> Self {
        self.os_release = path.into();
        self
    }

    /// Replace the tool probe
    pub fn with_probe<Q: ToolProbe>(self, probe: Q) -> DistroResolver<Q> {
        DistroResolver {
            os_release: self.os_release,
            probe,
        }
    }

    /// Identify the running distribution
    ///
    /// # Errors
    /// Returns [`ResolveError::DistroUnknown`] if the release file is
    /// unreadable or has no `ID=` line
    pub fn identify(&self) -> Result<DistroId, ResolveError> {
        DistroId::from_os_release(&self.os_release)
    }

    /// Pick the preferred installed backend for `distro`
    ///
    /// Unsupported distros fail before any tool is probed.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnsupportedDistro`] or
    /// [`ResolveError::NoAvailableBackend`]
    #[instrument(skip(self, distro), fields(distro = %distro))]
    pub fn select(&self, distro: &DistroId) -> Result<PackageManager, ResolveError> {
        let Some(candidates) = candidates_for(distro) else {
            warn!("distro not supported");
            return Err(ResolveError::UnsupportedDistro {
                distro_id: distro.clone(),
            });
        };

        for candidate in candidates {
            if self.probe.is_available(candidate.tool) {
                let manager = (candidate.build)();
                info!(manager = %manager, "selected package manager");
                return Ok(manager);
            }
            debug!(tool = candidate.tool, "candidate tool not installed");
        }

        Err(ResolveError::NoAvailableBackend {
            distro_id: distro.clone(),
            tried: candidates.iter().map(|c| c.tool.to_string()).collect(),
        })
    }

    /// Identify the distro and pick its backend
    ///
    /// # Errors
    /// Any [`ResolveError`]
    pub fn resolve(&self) -> Result<PackageManager, ResolveError> {
        let distro = self.identify()?;
        info!(distro = %distro, "detected distribution");
        self.select(&distro)
    }
}
