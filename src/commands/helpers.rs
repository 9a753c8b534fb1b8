//! Command helper utilities

use std::path::PathBuf;

use crate::error::{DeployError, Result};

/// Resolve the project directory from an optional argument
///
/// Falls back to the current directory. An explicit path must exist.
pub fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    match project_dir {
        Some(path) if path.is_dir() => Ok(path),
        Some(path) => Err(DeployError::ProjectDirNotFound {
            path: path.display().to_string(),
        }),
        None => std::env::current_dir().map_err(|e| DeployError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
