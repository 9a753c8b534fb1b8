//! Deployment sequencer
//!
//! Runs the steps of a [`DeploymentPlan`] strictly in order, one process at a
//! time. Each announcement is reported before its step is handed to the
//! runner, and the next step only starts once the previous one has exited.
//!
//! Under [`FailurePolicy::Continue`] a failing step is recorded and logged,
//! and the sequence moves on. Under [`FailurePolicy::Halt`] the remaining
//! steps are recorded as [`StepStatus::NotRun`].

pub mod process;


pub use process::ProcessRunner;

use tracing::{info, warn};

use crate::domain::{DeployReport, FailurePolicy, Step, StepStatus};
use crate::plan::DeploymentPlan;
use crate::ui::ProgressReporter;

/// Executes a single step and waits for it to finish
pub trait StepRunner {
    fn run_step(&mut self, step: &Step) -> StepStatus;
}

pub struct Sequencer<R: StepRunner, P: ProgressReporter> {
    runner: R,
    reporter: P,
    policy: FailurePolicy,
    dry_run: bool,
}

impl<R: StepRunner, P: ProgressReporter> Sequencer<R, P> {
    pub fn new(runner: R, reporter: P) -> Self {
        Self {
            runner,
            reporter,
            policy: FailurePolicy::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run every step of the plan in order
    pub fn run(&mut self, plan: &DeploymentPlan) -> DeployReport {
        let total = plan.len();
        let mut report = DeployReport::default();
        let mut halted = false;

        for (index, step) in plan.steps.iter().enumerate() {
            if halted {
                report.push(step.id.clone(), StepStatus::NotRun);
                continue;
            }

            self.reporter.step_started(index, total, step);

            let status = if self.dry_run {
                StepStatus::Skipped
            } else {
                info!(
                    step = %step.id,
                    position = index + 1,
                    total,
                    command = %step.command_line(),
                    "spawning step"
                );
                self.runner.run_step(step)
            };

            if status.is_failure() {
                match self.policy {
                    FailurePolicy::Continue => {
                        warn!(step = %step.id, status = ?status, "step failed, continuing");
                    }
                    FailurePolicy::Halt => {
                        warn!(step = %step.id, status = ?status, "step failed, halting");
                        halted = true;
                    }
                }
            }

            self.reporter.step_finished(index, total, step, &status);
            report.push(step.id.clone(), status);
        }

        self.reporter.summary(&report);
        report
    }
}
