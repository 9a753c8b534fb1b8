//! Version command implementation
//!
//! Besides the version, prints the built-in deployment defaults so a bug
//! report shows what an unconfigured `hs-deploy` would run.

use std::io::Write;

use crate::config::{CONFIG_FILE_NAME, DeployConfig};
use crate::error::Result;
use crate::plan::DeploymentPlan;

/// Run version command
pub fn run() -> Result<()> {
    write_version(&mut std::io::stdout().lock())
}

fn write_version(out: &mut impl Write) -> Result<()> {
    let defaults = DeployConfig::default();
    let plan = DeploymentPlan::from_config(&defaults)?;

    writeln!(out, "hs-deploy {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  Config file: {CONFIG_FILE_NAME}")?;
    writeln!(out, "  Steps: {}", plan.len())?;
    writeln!(out, "  Data source: {}", defaults.data_source)?;
    writeln!(
        out,
        "  Web server: {}:{}",
        defaults.server.address, defaults.server.port
    )?;
    writeln!(
        out,
        "  Build: rust {}, {}",
        env!("CARGO_PKG_RUST_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" }
    )?;
    Ok(())
}
