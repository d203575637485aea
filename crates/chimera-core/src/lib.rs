//! chimera-core: Update orchestration
//!
//! Drives the resolved package manager for the front-ends: checking for
//! updates, upgrading, and turning command results into outcomes.

pub mod config;
pub mod controller;
pub mod error;
pub mod factory;
pub mod outcome;

pub use config::Config;
pub use controller::{UpdateController, parse_update_count};
pub use error::CoreError;
pub use factory::{build_controller, build_controller_with};
pub use outcome::{UpdateOutcome, UpgradeOutcome};
