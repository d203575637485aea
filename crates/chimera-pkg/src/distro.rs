//! Distribution identity from the os-release file

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ResolveError;

/// Standard location of the release descriptor
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

const ID_KEY: &str = "ID=";

/// Distribution identifier, the value of the `ID=` key (`debian`, `fedora`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistroId(String);

impl DistroId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the id from os-release content
    ///
    /// Uses the first line starting with `ID=`; surrounding whitespace and
    /// quotes are stripped. Returns `None` when no such line holds a value.
    #[must_use]
    pub fn parse_os_release(content: &str) -> Option<Self> {
        let value = content
            .lines()
            .find_map(|line| line.strip_prefix(ID_KEY))?
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim();

        if value.is_empty() {
            None
        } else {
            Some(Self::new(value))
        }
    }

    /// Read and parse an os-release file
    ///
    /// # Errors
    /// Returns [`ResolveError::DistroUnknown`] if the file cannot be read or
    /// has no usable `ID=` line
    pub fn from_os_release(path: &Path) -> Result<Self, ResolveError> {
        debug!(path = %path.display(), "reading distro id");

        let content = fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to read distro id");
            ResolveError::DistroUnknown {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        Self::parse_os_release(&content).ok_or_else(|| ResolveError::DistroUnknown {
            path: path.to_path_buf(),
            reason: "no ID= line".to_string(),
        })
    }
}

impl fmt::Display for DistroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
