//! Step outcomes and the deployment report

/// Exit code a shell reports when a command cannot be started
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// What the sequencer does after a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and run the next step anyway
    #[default]
    Continue,
    /// Stop at the first failing step
    Halt,
}

impl FailurePolicy {
    pub fn from_halt_flag(halt: bool) -> Self {
        if halt { Self::Halt } else { Self::Continue }
    }
}

/// What happened to a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Process exited with code 0
    Succeeded,
    /// Process exited non-zero (or was killed by a signal)
    Failed { code: i32 },
    /// Process could not be started
    SpawnFailed { reason: String },
    /// Dry run: announced but not spawned
    Skipped,
    /// Sequence halted before reaching this step
    NotRun,
}

impl StepStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::SpawnFailed { .. })
    }

    /// Exit code of the process, if one was started (or attempted)
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Succeeded => Some(0),
            Self::Failed { code } => Some(*code),
            Self::SpawnFailed { .. } => Some(SPAWN_FAILURE_EXIT_CODE),
            Self::Skipped | Self::NotRun => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "ok",
            Self::Failed { .. } => "failed",
            Self::SpawnFailed { .. } => "not started",
            Self::Skipped => "skipped",
            Self::NotRun => "not run",
        }
    }
}

/// Outcome of one step, in plan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step_id: String,
    pub status: StepStatus,
}

/// Ordered outcomes of one deployment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub outcomes: Vec<StepOutcome>,
}

impl DeployReport {
    pub fn push(&mut self, step_id: impl Into<String>, status: StepStatus) {
        self.outcomes.push(StepOutcome {
            step_id: step_id.into(),
            status,
        });
    }

    /// Exit code of the last step that ran, or 0 if none did
    pub fn exit_code(&self) -> i32 {
        self.outcomes
            .iter()
            .rev()
            .find_map(|o| o.status.exit_code())
            .unwrap_or(0)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }

    pub fn first_failure(&self) -> Option<&StepOutcome> {
        self.failures().next()
    }

    pub fn is_success(&self) -> bool {
        self.first_failure().is_none()
    }

    /// Ids of steps whose process was started or attempted
    pub fn attempted(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.status.exit_code().is_some())
            .map(|o| o.step_id.as_str())
            .collect()
    }
}
