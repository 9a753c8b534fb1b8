//! Step execution errors

use super::DeployError;

/// Creates a step failed error
pub fn failed(step: impl Into<String>, code: i32) -> DeployError {
    DeployError::StepFailed {
        step: step.into(),
        code,
    }
}

/// Creates a step spawn failed error
pub fn spawn_failed(
    step: impl Into<String>,
    program: impl Into<String>,
    reason: impl Into<String>,
) -> DeployError {
    DeployError::StepSpawnFailed {
        step: step.into(),
        program: program.into(),
        reason: reason.into(),
    }
}
