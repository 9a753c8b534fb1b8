//! Plan command implementation
//!
//! Prints the steps a `run` would execute, in order, without spawning anything.

use std::io::Write;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::PlanArgs;
use crate::commands::helpers::resolve_project_dir;
use crate::config::DeployConfig;
use crate::error::Result;
use crate::plan::DeploymentPlan;

/// Run plan command
pub fn run(project_dir: Option<PathBuf>, config: Option<PathBuf>, args: PlanArgs) -> Result<()> {
    let project_dir = resolve_project_dir(project_dir)?;
    let mut deploy_config = DeployConfig::resolve(&project_dir, config.as_deref())?;
    if let Some(source) = args.data_source {
        deploy_config.data_source = source;
    }
    let plan = DeploymentPlan::from_config(&deploy_config)?;

    let mut out = std::io::stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
    } else {
        write_plan(&mut out, &plan, &project_dir)?;
    }
    Ok(())
}

fn write_plan(out: &mut impl Write, plan: &DeploymentPlan, project_dir: &Path) -> Result<()> {
    writeln!(
        out,
        "{} ({} steps in {})",
        Style::new().bold().apply_to("Deployment plan"),
        plan.len(),
        project_dir.display()
    )?;

    let width = plan.steps.iter().map(|s| s.id.len()).max().unwrap_or(0);
    for (index, step) in plan.steps.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<width$}  {}",
            index + 1,
            Style::new().yellow().apply_to(&step.id),
            step.command_line(),
        )?;
        writeln!(out, "     {:<width$}  {}", "", Style::new().dim().apply_to(&step.announce))?;
    }
    Ok(())
}
