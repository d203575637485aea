//! Configuration loading and types

use std::path::{Path, PathBuf};

use chimera_pkg::OS_RELEASE_PATH;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "CHIMERA_UPDATE_CONFIG";

const CONFIG_FILE: &str = "chimera-update.toml";

/// Settings shared by the front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Release descriptor used to identify the distro
    #[serde(default = "default_os_release")]
    pub os_release: PathBuf,
    /// Command prefixed to privileged package manager commands
    #[serde(default)]
    pub elevate_with: Option<String>,
    /// Send desktop notifications for outcomes
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    /// Log level (trace, debug, info, warn, error) when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            os_release: default_os_release(),
            elevate_with: None,
            notifications: default_notifications(),
            log_level: default_log_level(),
        }
    }
}

fn default_os_release() -> PathBuf {
    PathBuf::from(OS_RELEASE_PATH)
}

fn default_notifications() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if the text is not valid configuration
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content).map_err(|e| match e {
            CoreError::Config(msg) => CoreError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Load from an explicit path, the environment, default paths, or defaults
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        for path in Self::search_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }

        tracing::warn!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Load from the environment, default paths, or defaults
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load_default() -> Result<Self, CoreError> {
        Self::load_from(None)
    }

    /// Candidate config files, in lookup order
    #[must_use]
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE),
            PathBuf::from("/etc/chimera-update").join(CONFIG_FILE),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("chimera-update").join(CONFIG_FILE));
        }
        paths
    }
}
