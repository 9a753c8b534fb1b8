//! Init command implementation
//!
//! Writes the built-in configuration to `hs-deploy.yaml` so it can be edited.

use std::path::{Path, PathBuf};

use crate::cli::InitArgs;
use crate::commands::helpers::resolve_project_dir;
use crate::config::{CONFIG_FILE_NAME, DeployConfig};
use crate::error::{Result, config_exists};

/// Run init command
pub fn run(project_dir: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let project_dir = resolve_project_dir(project_dir)?;
    let path = write_default_config(&project_dir, args.force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn write_default_config(project_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(config_exists(path.display().to_string()));
    }
    std::fs::write(&path, DeployConfig::default().to_yaml()?)?;
    Ok(path)
}
