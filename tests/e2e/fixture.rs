//! Shared project fixture for end-to-end scenarios.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub struct CommandOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|err| panic!("stdout is not JSON ({err}):\n{}", self.stdout))
    }
}

/// A throwaway project directory the CLI runs against.
pub struct E2EFixture {
    pub scenario: String,
    _temp_dir: TempDir,
    pub project: PathBuf,
}

impl E2EFixture {
    pub fn new(scenario: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let project = temp_dir.path().join("project");
        std::fs::create_dir_all(&project).expect("create project dir");
        Self {
            scenario: scenario.to_string(),
            _temp_dir: temp_dir,
            project,
        }
    }

    pub fn log_step(&self, step: &str) {
        eprintln!("[{}] {step}", self.scenario);
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.project.join(rel)
    }

    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn create_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel))
            .unwrap_or_else(|err| panic!("read {rel}: {err}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Run `motion` with `--cwd` pointing at the project and config isolated.
    pub fn run_motion(&self, args: &[&str]) -> CommandOutput {
        self.run_in(&self.project, args)
    }

    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> CommandOutput {
        let mut cmd = Command::cargo_bin("motion").expect("motion binary");
        cmd.env("MOTION_CONFIG", self.project.join(".motion-test-config.toml"))
            .env_remove("MOTION_ROBOT")
            .env_remove("MOTION_REGISTRY_URL")
            .env_remove("MOTION_INSTALL_ROOTS")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--cwd")
            .arg(cwd)
            .args(args);

        let output = cmd.output().expect("run motion");
        let result = CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        eprintln!(
            "[{}] motion {} -> {:?}\nstdout:\n{}\nstderr:\n{}",
            self.scenario,
            args.join(" "),
            result.exit_code,
            result.stdout,
            result.stderr
        );
        result
    }

    pub fn assert_success(&self, output: &CommandOutput, what: &str) {
        assert!(
            output.success,
            "[{}] {what} failed with {:?}\nstderr:\n{}",
            self.scenario, output.exit_code, output.stderr
        );
    }

    pub fn assert_exit(&self, output: &CommandOutput, code: i32, what: &str) {
        assert_eq!(
            output.exit_code,
            Some(code),
            "[{}] {what} exit code\nstdout:\n{}\nstderr:\n{}",
            self.scenario, output.stdout, output.stderr
        );
    }
}
