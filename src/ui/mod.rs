//! Progress presentation layer
//!
//! All user-visible progress goes through the [`ProgressReporter`] trait so
//! the sequencer never writes to the terminal directly.

use std::io::{self, Write};

use console::Style;

use crate::domain::{DeployReport, Step, StepStatus};

/// Progress reporter for the deployment sequence
pub trait ProgressReporter {
    /// Called before the step's process is spawned
    fn step_started(&mut self, index: usize, total: usize, step: &Step);

    /// Called after the step's process has exited (or was skipped)
    fn step_finished(&mut self, index: usize, total: usize, step: &Step, status: &StepStatus);

    /// Called once when the whole sequence has returned
    fn summary(&mut self, report: &DeployReport);
}

/// Reporter printing announcement lines to a terminal
///
/// Write errors are ignored: a closed stdout must not abort a deployment.
pub struct ConsoleReporter<W: Write> {
    out: W,
    dry_run: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(io::stdout(), dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for ConsoleReporter<W> {
    fn step_started(&mut self, _index: usize, _total: usize, step: &Step) {
        let _ = writeln!(self.out, "{}", Style::new().bold().apply_to(&step.announce));
        if self.dry_run {
            let _ = writeln!(
                self.out,
                "  {} {}",
                Style::new().dim().apply_to("would run:"),
                step.command_line()
            );
        }
        // Child output shares the terminal; the announcement must land first
        let _ = self.out.flush();
    }

    fn step_finished(&mut self, _index: usize, _total: usize, step: &Step, status: &StepStatus) {
        let line = match status {
            StepStatus::Failed { code } => {
                format!("Step '{}' exited with code {code}", step.id)
            }
            StepStatus::SpawnFailed { reason } => {
                format!("Step '{}' could not start {}: {reason}", step.id, step.program)
            }
            StepStatus::Succeeded | StepStatus::Skipped | StepStatus::NotRun => return,
        };
        let _ = writeln!(self.out, "{}", Style::new().red().apply_to(line));
        let _ = self.out.flush();
    }

    fn summary(&mut self, report: &DeployReport) {
        let count = |label: &str| {
            report
                .outcomes
                .iter()
                .filter(|o| o.status.label() == label)
                .count()
        };

        let mut parts = Vec::new();
        for label in ["ok", "failed", "not started", "skipped", "not run"] {
            let n = count(label);
            if n > 0 {
                parts.push(format!("{n} {label}"));
            }
        }

        let style = if report.is_success() {
            Style::new().green().bold()
        } else {
            Style::new().yellow().bold()
        };
        let _ = writeln!(
            self.out,
            "{} {}",
            style.apply_to("Deployment finished:"),
            parts.join(", ")
        );
        let _ = self.out.flush();
    }
}
