//! Type definitions for package management

use std::fmt;

use serde::{Deserialize, Serialize};

const APT_CHECK: &str = "apt-get -q update";
const APT_COUNT: &str = "apt-get -q -y --ignore-hold --allow-change-held-packages \
                         --allow-unauthenticated -s dist-upgrade | grep ^Inst | wc -l";
const APT_UPGRADE: &str = "apt upgrade -y";
const NALA_UPGRADE: &str = "nala upgrade -y";
const DNF_CHECK: &str = "dnf check-update";
const DNF_COUNT: &str = "dnf check-update | grep -v '^$' | wc -l";
const DNF_UPGRADE: &str = "dnf upgrade";
const PACMAN_CHECK: &str = "pacman -Qu";
const PACMAN_COUNT: &str = "pacman -Qu | wc -l";
const PACMAN_UPGRADE: &str = "pacman -Syu";

/// The three shell command lines a backend is made of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSet {
    /// Refreshes the local package index
    pub check: String,
    /// Prints the number of pending updates on stdout
    pub count: String,
    /// Upgrades all packages non-interactively
    pub upgrade: String,
}

impl CommandSet {
    pub fn new(
        check: impl Into<String>,
        count: impl Into<String>,
        upgrade: impl Into<String>,
    ) -> Self {
        Self {
            check: check.into(),
            count: count.into(),
            upgrade: upgrade.into(),
        }
    }

    /// Replace the upgrade command, keeping check and count
    #[must_use]
    pub fn with_upgrade(self, upgrade: impl Into<String>) -> Self {
        Self {
            upgrade: upgrade.into(),
            ..self
        }
    }
}

/// Supported package managers
///
/// Each variant carries its own command lines. Nala shares apt's index and
/// counting commands and only swaps the upgrade command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "manager", rename_all = "snake_case")]
pub enum PackageManager {
    /// APT (Debian/Ubuntu)
    Apt(CommandSet),
    /// Nala frontend over APT
    Nala(CommandSet),
    /// DNF (Fedora)
    Dnf(CommandSet),
    /// Pacman (Arch)
    Pacman(CommandSet),
}

impl PackageManager {
    #[must_use]
    pub fn apt() -> Self {
        Self::Apt(CommandSet::new(APT_CHECK, APT_COUNT, APT_UPGRADE))
    }

    #[must_use]
    pub fn nala() -> Self {
        Self::Nala(Self::apt().into_commands().with_upgrade(NALA_UPGRADE))
    }

    #[must_use]
    pub fn dnf() -> Self {
        Self::Dnf(CommandSet::new(DNF_CHECK, DNF_COUNT, DNF_UPGRADE))
    }

    #[must_use]
    pub fn pacman() -> Self {
        Self::Pacman(CommandSet::new(PACMAN_CHECK, PACMAN_COUNT, PACMAN_UPGRADE))
    }

    /// Command lines of this manager
    #[must_use]
    pub fn commands(&self) -> &CommandSet {
        match self {
            Self::Apt(commands)
            | Self::Nala(commands)
            | Self::Dnf(commands)
            | Self::Pacman(commands) => commands,
        }
    }

    #[must_use]
    pub fn into_commands(self) -> CommandSet {
        match self {
            Self::Apt(commands)
            | Self::Nala(commands)
            | Self::Dnf(commands)
            | Self::Pacman(commands) => commands,
        }
    }

    /// Binary whose presence selects this manager
    #[must_use]
    pub fn tool(&self) -> &'static str {
        match self {
            Self::Apt(_) => "apt",
            Self::Nala(_) => "nala",
            Self::Dnf(_) => "dnf",
            Self::Pacman(_) => "pacman",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool())
    }
}
