//! chimera-update CLI
//!
//! Command-line interface for checking and applying system package updates

use std::path::PathBuf;
use std::process::ExitCode;

use chimera_core::{
    Config, CoreError, UpdateController, UpdateOutcome, UpgradeOutcome, build_controller,
};
use chimera_pkg::DistroResolver;
use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chimera-update-cli", version)]
#[command(about = "Check for and apply system package updates", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the standard lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected distro and package manager
    Detect,
    /// Refresh the package index and count pending updates
    Check {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upgrade all packages
    Upgrade {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load_from(cli.config.as_deref())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(err @ CoreError::Resolve(_)) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        Commands::Detect => detect(&config, &controller),
        Commands::Check { json } => check(&controller, json).await,
        Commands::Upgrade { json } => upgrade(&controller, json).await,
    }
}

fn detect(config: &Config, controller: &UpdateController) -> Result<ExitCode> {
    let distro = DistroResolver::new()
        .with_os_release(&config.os_release)
        .identify()?;
    let backend = controller.backend();

    println!("distro:  {distro}");
    println!("manager: {}", backend.manager());
    println!("check:   {}", backend.check_command());
    println!("count:   {}", backend.count_command());
    println!("upgrade: {}", backend.upgrade_command());
    Ok(ExitCode::SUCCESS)
}

async fn check(controller: &UpdateController, json: bool) -> Result<ExitCode> {
    let outcome = controller.check_for_updates().await?;
    info!(%outcome, failure = outcome.is_failure(), "update check finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_failure() {
        eprintln!("Error: {outcome}");
    } else {
        println!("{outcome}");
    }

    Ok(ExitCode::from(check_exit_code(&outcome)))
}

async fn upgrade(controller: &UpdateController, json: bool) -> Result<ExitCode> {
    let outcome = controller.apply_upgrade().await?;
    info!(%outcome, "upgrade finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_failure() {
        eprintln!("Error: {outcome}");
    } else {
        println!("{outcome}");
    }

    Ok(match outcome {
        UpgradeOutcome::Completed => ExitCode::SUCCESS,
        UpgradeOutcome::Failed { status, .. } => ExitCode::from(exit_status(status)),
    })
}

/// Exit code for a check: pending updates are not an error
fn check_exit_code(outcome: &UpdateOutcome) -> u8 {
    u8::from(outcome.is_failure())
}

/// Map a child exit status onto a non-zero process exit code
fn exit_status(status: i32) -> u8 {
    u8::try_from(status).ok().filter(|code| *code != 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_json() {
        let cli = Cli::try_parse_from(["chimera-update-cli", "check", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { json: true }));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(100), 100);
        assert_eq!(exit_status(1), 1);
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(300), 1);
    }

    #[test]
    fn test_check_exit_code() {
        assert_eq!(check_exit_code(&UpdateOutcome::NoUpdates), 0);
        assert_eq!(check_exit_code(&UpdateOutcome::UpdatesAvailable { count: 5 }), 0);
        assert_eq!(
            check_exit_code(&UpdateOutcome::CheckFailed {
                reason: "Unable to check for updates".to_string()
            }),
            1
        );
        assert_eq!(check_exit_code(&UpdateOutcome::ParseFailed), 1);
    }
}
