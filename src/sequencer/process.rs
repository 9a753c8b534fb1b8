//! Subprocess-backed step runner

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::debug;

use super::StepRunner;
use crate::domain::{Step, StepStatus};

/// Runs each step as a child process sharing this process's stdio
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    project_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    fn working_dir(&self, step: &Step) -> PathBuf {
        match &step.dir {
            Some(dir) => self.project_dir.join(dir),
            None => self.project_dir.clone(),
        }
    }
}

impl StepRunner for ProcessRunner {
    fn run_step(&mut self, step: &Step) -> StepStatus {
        let dir = self.working_dir(step);
        let result = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&dir)
            .status();

        match result {
            Ok(status) => {
                debug!(step = %step.id, %status, "step exited");
                status_from_exit(status)
            }
            Err(e) => StepStatus::SpawnFailed {
                reason: e.to_string(),
            },
        }
    }
}

fn status_from_exit(status: ExitStatus) -> StepStatus {
    if status.success() {
        StepStatus::Succeeded
    } else {
        StepStatus::Failed {
            code: exit_code(status),
        }
    }
}

/// Exit code as a shell would report it
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
