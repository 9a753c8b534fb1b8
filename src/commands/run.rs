//! Run command implementation
//!
//! Resolves the project directory and configuration, builds the deployment
//! plan and hands it to the sequencer. The returned exit code is the exit
//! code of the last step that ran, which for a full deployment is the web
//! server's.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::RunArgs;
use crate::commands::helpers::resolve_project_dir;
use crate::config::DeployConfig;
use crate::domain::{DeployReport, FailurePolicy, StepStatus};
use crate::error::{DeployError, Result, step_failed, step_spawn_failed};
use crate::plan::DeploymentPlan;
use crate::sequencer::{ProcessRunner, Sequencer};
use crate::ui::ConsoleReporter;

/// Run the deployment sequence, returning the process exit code
pub fn run(project_dir: Option<PathBuf>, config: Option<PathBuf>, args: RunArgs) -> Result<i32> {
    let project_dir = resolve_project_dir(project_dir)?;
    let mut deploy_config = DeployConfig::resolve(&project_dir, config.as_deref())?;
    apply_overrides(&mut deploy_config, &args);
    deploy_config.validate()?;

    let plan = DeploymentPlan::from_config(&deploy_config)?;
    let policy =
        FailurePolicy::from_halt_flag(args.halt_on_failure || deploy_config.halt_on_failure);
    debug!(
        project_dir = %project_dir.display(),
        steps = plan.len(),
        ?policy,
        dry_run = args.dry_run,
        "starting deployment"
    );

    let mut sequencer = Sequencer::new(
        ProcessRunner::new(&project_dir),
        ConsoleReporter::stdout(args.dry_run),
    )
    .with_policy(policy)
    .with_dry_run(args.dry_run);

    let report = sequencer.run(&plan);
    debug!(
        attempted = ?report.attempted(),
        exit_code = report.exit_code(),
        "deployment sequence returned"
    );

    if policy == FailurePolicy::Halt {
        if let Some(error) = halt_error(&plan, &report) {
            return Err(error);
        }
    }

    Ok(report.exit_code())
}

/// Apply command-line overrides on top of the file configuration
fn apply_overrides(config: &mut DeployConfig, args: &RunArgs) {
    let overridden = args.data_source.is_some() || args.port.is_some() || args.address.is_some();
    if overridden && config.steps.is_some() {
        warn!("--data-source, --port and --address have no effect on an explicit step list");
    }

    if let Some(source) = args.data_source {
        config.data_source = source;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(address) = &args.address {
        config.server.address.clone_from(address);
    }
}

fn halt_error(plan: &DeploymentPlan, report: &DeployReport) -> Option<DeployError> {
    let failure = report.first_failure()?;
    match &failure.status {
        StepStatus::Failed { code } => Some(step_failed(&failure.step_id, *code)),
        StepStatus::SpawnFailed { reason } => {
            let program = plan
                .steps
                .iter()
                .find(|s| s.id == failure.step_id)
                .map(|s| s.program.clone())
                .unwrap_or_default();
            Some(step_spawn_failed(&failure.step_id, program, reason))
        }
        StepStatus::Succeeded | StepStatus::Skipped | StepStatus::NotRun => None,
    }
}
