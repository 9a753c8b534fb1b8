//! Common test utilities for hs-deploy integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get a command for the real hs-deploy binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn hs_deploy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hs-deploy").unwrap();
    cmd.env_remove("HS_DEPLOY_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Get a command running inside a project directory
#[allow(dead_code)]
pub fn hs_deploy_cmd_for_project(path: &Path) -> Command {
    let mut cmd = hs_deploy_cmd();
    cmd.current_dir(path);
    cmd
}

/// A stub step: a shell script that logs its invocation and exits
#[allow(dead_code)]
pub struct StubStep {
    pub id: &'static str,
    pub announce: &'static str,
    pub args: Vec<&'static str>,
    pub exit_code: i32,
    /// Shell command the stub `exec`s after logging, instead of exiting
    pub exec: Option<&'static str>,
}

#[allow(dead_code)]
impl StubStep {
    pub fn new(id: &'static str, announce: &'static str) -> Self {
        Self {
            id,
            announce,
            args: Vec::new(),
            exit_code: 0,
            exec: None,
        }
    }

    pub fn args(mut self, args: &[&'static str]) -> Self {
        self.args = args.to_vec();
        self
    }

    pub fn exits_with(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn execs(mut self, command: &'static str) -> Self {
        self.exec = Some(command);
        self
    }
}

/// The five deployment steps, stubbed with the stock announcements and arguments
#[allow(dead_code)]
pub fn stock_stubs() -> Vec<StubStep> {
    vec![
        StubStep::new("install", "Installing dependencies...")
            .args(&["install", "-r", "requirements.txt"]),
        StubStep::new("setup-data", "Setting up data..."),
        StubStep::new("process-data", "Processing data and generating embeddings..."),
        StubStep::new("setup-vector-db", "Setting up vector database..."),
        StubStep::new("serve", "Starting web application...").args(&[
            "--server.port",
            "8501",
            "--server.address",
            "0.0.0.0",
        ]),
    ]
}

/// A temporary project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of the invocation log written by stub steps
    pub fn log_path(&self) -> PathBuf {
        self.path.join("invocations.log")
    }

    /// Lines of the invocation log, one per spawned stub
    pub fn invocations(&self) -> Vec<String> {
        if !self.log_path().exists() {
            return Vec::new();
        }
        self.read_file("invocations.log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write stub scripts and an hs-deploy.yaml whose steps run them
    ///
    /// Each stub appends `<id> <args>` to the invocation log, prints
    /// `spawned <id>` to stdout and exits with its configured code, or
    /// replaces itself with its `exec` command.
    pub fn install_stubs(&self, stubs: &[StubStep]) {
        let log = self.log_path();
        let mut yaml = String::from("steps:\n");

        for stub in stubs {
            let script = format!("stubs/{}.sh", stub.id);
            let tail = match stub.exec {
                Some(command) => format!("exec {command}\n"),
                None => format!("exit {}\n", stub.exit_code),
            };
            self.write_file(
                &script,
                &format!(
                    "echo \"{id} $*\" >> '{log}'\necho \"spawned {id}\"\n{tail}",
                    id = stub.id,
                    log = log.display(),
                ),
            );

            let mut args = vec![self.path.join(&script).display().to_string()];
            args.extend(stub.args.iter().map(|a| (*a).to_string()));
            let args = args
                .iter()
                .map(|a| format!("'{a}'"))
                .collect::<Vec<_>>()
                .join(", ");

            yaml.push_str(&format!(
                "  - id: {}\n    announce: '{}'\n    program: sh\n    args: [{}]\n",
                stub.id, stub.announce, args
            ));
        }

        self.write_file("hs-deploy.yaml", &yaml);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.path.exists());
        assert!(project.invocations().is_empty());
    }

    #[test]
    fn test_install_stubs_writes_config_and_scripts() {
        let project = TestProject::new();
        project.install_stubs(&stock_stubs());

        assert!(project.file_exists("hs-deploy.yaml"));
        assert!(project.file_exists("stubs/install.sh"));
        assert!(project.file_exists("stubs/serve.sh"));
        assert!(project.read_file("hs-deploy.yaml").contains("id: setup-vector-db"));
    }
}
