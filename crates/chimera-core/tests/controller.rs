use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chimera_core::{
    Config, CoreError, UpdateController, UpdateOutcome, UpgradeOutcome, build_controller_with,
};
use chimera_exec::{CommandResult, CommandRunner, ExecError, ToolProbe};
use chimera_pkg::{Backend, DistroResolver, PackageManager, ResolveError};

// Mock implementations
#[derive(Default)]
struct ScriptedRunner {
    replies: HashMap<String, CommandResult>,
    unlaunchable: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    fn reply(mut self, cmd: &str, status: i32, stdout: &str) -> Self {
        self.replies
            .insert(cmd.to_string(), CommandResult::new(status, stdout, ""));
        self
    }

    fn reply_err(mut self, cmd: &str, status: i32, stderr: &str) -> Self {
        self.replies
            .insert(cmd.to_string(), CommandResult::new(status, "", stderr));
        self
    }

    fn unlaunchable(mut self, cmd: &str) -> Self {
        self.unlaunchable.push(cmd.to_string());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError> {
        self.calls.lock().unwrap().push(cmd.to_string());
        if self.unlaunchable.iter().any(|c| c == cmd) {
            return Err(ExecError::Spawn {
                command: cmd.to_string(),
                cause: "No such file or directory (os error 2)".to_string(),
            });
        }
        Ok(self
            .replies
            .get(cmd)
            .cloned()
            .unwrap_or_else(|| CommandResult::new(127, "", "command not scripted")))
    }

    fn runner_type(&self) -> &'static str {
        "scripted"
    }
}

struct AllTools;

impl ToolProbe for AllTools {
    fn is_available(&self, _tool: &str) -> bool {
        true
    }
}

fn pacman() -> PackageManager {
    PackageManager::pacman()
}

fn controller(runner: &Arc<ScriptedRunner>) -> UpdateController {
    UpdateController::new(Backend::new(pacman(), runner.clone()))
}

fn count_reply(stdout: &str) -> Arc<ScriptedRunner> {
    Arc::new(
        ScriptedRunner::default()
            .reply("pacman -Qu", 0, "linux 6.9.1 -> 6.9.2\n")
            .reply("pacman -Qu | wc -l", 0, stdout),
    )
}

#[tokio::test]
async fn test_count_zero_is_no_updates() {
    let runner = count_reply("0\n");
    let outcome = controller(&runner).check_for_updates().await.unwrap();

    assert_eq!(outcome, UpdateOutcome::NoUpdates);
    assert_eq!(runner.calls(), ["pacman -Qu", "pacman -Qu | wc -l"]);
}

#[tokio::test]
async fn test_count_one_and_five() {
    let runner = count_reply("1\n");
    assert_eq!(
        controller(&runner).check_for_updates().await.unwrap(),
        UpdateOutcome::UpdatesAvailable { count: 1 }
    );

    let runner = count_reply("5");
    assert_eq!(
        controller(&runner).check_for_updates().await.unwrap(),
        UpdateOutcome::UpdatesAvailable { count: 5 }
    );
}

#[tokio::test]
async fn test_non_numeric_count_is_parse_failure() {
    let runner = count_reply("abc");
    let outcome = controller(&runner).check_for_updates().await.unwrap();

    assert_eq!(outcome, UpdateOutcome::ParseFailed);
}

#[tokio::test]
async fn test_failed_refresh_skips_count() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .reply_err("pacman -Qu", 1, "error: failed to synchronize")
            .reply("pacman -Qu | wc -l", 0, "3"),
    );
    let outcome = controller(&runner).check_for_updates().await.unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::CheckFailed {
            reason: "Unable to check for updates".to_string()
        }
    );
    assert_eq!(runner.calls(), ["pacman -Qu"]);
}

#[tokio::test]
async fn test_failed_count_is_not_parsed() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .reply("pacman -Qu", 0, "")
            .reply("pacman -Qu | wc -l", 2, "4"),
    );
    let outcome = controller(&runner).check_for_updates().await.unwrap();

    assert!(matches!(outcome, UpdateOutcome::CheckFailed { .. }));
}

#[tokio::test]
async fn test_check_is_idempotent() {
    let runner = count_reply("5\n");
    let controller = controller(&runner);

    let first = controller.check_for_updates().await.unwrap();
    let second = controller.check_for_updates().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(runner.calls().len(), 4);
}

#[tokio::test]
async fn test_unlaunchable_check_is_an_error() {
    let runner = Arc::new(ScriptedRunner::default().unlaunchable("pacman -Qu"));
    let err = controller(&runner).check_for_updates().await.unwrap_err();

    assert!(matches!(err, CoreError::Execution(ExecError::Spawn { .. })));
    assert_eq!(runner.calls(), ["pacman -Qu"]);
}

#[tokio::test]
async fn test_upgrade_completes() {
    let runner = Arc::new(ScriptedRunner::default().reply("pacman -Syu", 0, "done"));
    let outcome = controller(&runner).apply_upgrade().await.unwrap();

    assert_eq!(outcome, UpgradeOutcome::Completed);
    assert_eq!(runner.calls(), ["pacman -Syu"]);
}

#[tokio::test]
async fn test_upgrade_failure_carries_status() {
    let runner = Arc::new(ScriptedRunner::default().reply_err(
        "pacman -Syu",
        1,
        "error: failed to init transaction (unable to lock database)",
    ));
    let outcome = controller(&runner).apply_upgrade().await.unwrap();

    assert_eq!(
        outcome,
        UpgradeOutcome::Failed {
            status: 1,
            stderr: "error: failed to init transaction (unable to lock database)".to_string(),
        }
    );
}

#[tokio::test]
async fn test_factory_applies_elevation() {
    let mut os_release = tempfile::NamedTempFile::new().unwrap();
    writeln!(os_release, "ID=ubuntu").unwrap();

    let runner = Arc::new(ScriptedRunner::default().reply("pkexec nala upgrade -y", 0, ""));
    let config = Config {
        os_release: os_release.path().to_path_buf(),
        elevate_with: Some("pkexec".to_string()),
        ..Config::default()
    };
    let resolver = DistroResolver::new()
        .with_os_release(&config.os_release)
        .with_probe(AllTools);

    let controller = build_controller_with(&resolver, runner.clone(), &config).unwrap();
    assert_eq!(controller.manager(), &PackageManager::nala());

    let outcome = controller.apply_upgrade().await.unwrap();
    assert_eq!(outcome, UpgradeOutcome::Completed);
    assert_eq!(runner.calls(), ["pkexec nala upgrade -y"]);
}

#[test]
fn test_factory_surfaces_resolve_error() {
    let mut os_release = tempfile::NamedTempFile::new().unwrap();
    writeln!(os_release, "ID=gentoo").unwrap();

    let config = Config {
        os_release: os_release.path().to_path_buf(),
        ..Config::default()
    };
    let resolver = DistroResolver::new()
        .with_os_release(&config.os_release)
        .with_probe(AllTools);

    let err = build_controller_with(&resolver, Arc::new(ScriptedRunner::default()), &config)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Resolve(ResolveError::UnsupportedDistro { .. })
    ));
}
