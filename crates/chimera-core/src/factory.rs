//! Startup wiring: resolve the distro and build the controller

use std::sync::Arc;

use chimera_exec::{CommandRunner, LocalRunner, ToolProbe};
use chimera_pkg::{Backend, DistroResolver};
use tracing::info;

use crate::config::Config;
use crate::controller::UpdateController;
use crate::error::CoreError;

/// Build the controller for this machine
///
/// Reads the configured os-release file, probes `PATH` and runs commands
/// through the local shell.
///
/// # Errors
/// Returns [`CoreError::Resolve`] if no package manager can be chosen
pub fn build_controller(config: &Config) -> Result<UpdateController, CoreError> {
    let resolver = DistroResolver::new().with_os_release(&config.os_release);
    build_controller_with(&resolver, Arc::new(LocalRunner::new()), config)
}

/// Build the controller from an explicit resolver and runner
///
/// # Errors
/// Returns [`CoreError::Resolve`] if no package manager can be chosen
pub fn build_controller_with<P: ToolProbe>(
    resolver: &DistroResolver<P>,
    runner: Arc<dyn CommandRunner>,
    config: &Config,
) -> Result<UpdateController, CoreError> {
    let manager = resolver.resolve()?;

    let mut backend = Backend::new(manager, runner);
    if let Some(prefix) = &config.elevate_with {
        backend = backend.with_elevation(prefix.as_str());
    }

    info!(
        manager = %backend.manager(),
        elevated = config.elevate_with.is_some(),
        "update controller ready"
    );
    Ok(UpdateController::new(backend))
}
