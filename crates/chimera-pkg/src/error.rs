//! Error types for chimera-pkg

use std::path::PathBuf;

use thiserror::Error;

use crate::distro::DistroId;

/// Errors raised while choosing a package manager at startup
///
/// All of them are fatal for the front-ends: there is nothing to drive
/// without a backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Release file unreadable or without an `ID=` line
    #[error("could not determine distro from {}: {reason}", .path.display())]
    DistroUnknown {
        /// Release file that was read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Distro is not in the support table
    #[error("no supported package manager found for distro: {distro_id}")]
    UnsupportedDistro {
        /// Detected distro
        distro_id: DistroId,
    },

    /// Distro is supported but none of its tools are installed
    #[error(
        "no supported package manager available for distro: {distro_id} (tried {})",
        .tried.join(", ")
    )]
    NoAvailableBackend {
        /// Detected distro
        distro_id: DistroId,
        /// Tools probed, in preference order
        tried: Vec<String>,
    },
}
