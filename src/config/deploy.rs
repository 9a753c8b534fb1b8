//! Deployment configuration (hs-deploy.yaml) data structures
//!
//! Every field is optional. A missing file means the built-in defaults, which
//! reproduce the stock deployment of the classifier.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CONFIG_FILE_NAME, DataSource};
use crate::domain::Step;
use crate::error::{
    DeployError, Result, config_invalid, config_not_found, config_parse_failed,
    config_read_failed,
};

/// Web server binding for the final step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub port: u16,
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            address: "0.0.0.0".to_string(),
        }
    }
}

/// Deployment configuration (hs-deploy.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Interpreter used for the data scripts
    pub python: String,

    /// Dependency installer
    pub pip: String,

    /// Web application launcher
    pub streamlit: String,

    /// Dependency manifest passed to the installer
    pub manifest: String,

    /// Which data acquisition script the setup step runs
    pub data_source: DataSource,

    /// Web application entry point
    pub app: String,

    pub server: ServerConfig,

    /// Stop at the first failing step instead of continuing
    pub halt_on_failure: bool,

    /// Explicit step list; replaces the generated plan when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            pip: "pip".to_string(),
            streamlit: "streamlit".to_string(),
            manifest: "requirements.txt".to_string(),
            data_source: DataSource::default(),
            app: "app.py".to_string(),
            server: ServerConfig::default(),
            halt_on_failure: false,
            steps: None,
        }
    }
}

impl DeployConfig {
    /// Parse deployment configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is a valid "all defaults" configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize deployment configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(config_not_found(display));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| config_read_failed(&display, e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            DeployError::ConfigParseFailed { reason, .. } => config_parse_failed(&display, reason),
            other => other,
        })
    }

    /// Resolve the configuration for a project
    ///
    /// An explicit path must exist. Otherwise `hs-deploy.yaml` in the project
    /// directory is used if present, falling back to the defaults.
    pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit configuration");
            return Self::load_from(path);
        }

        let candidate = project_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading project configuration");
            Self::load_from(&candidate)
        } else {
            debug!("no configuration file, using built-in plan");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(config_invalid("server.port must be between 1 and 65535"));
        }
        if self.server.address.trim().is_empty() {
            return Err(config_invalid("server.address cannot be empty"));
        }
        if let Some(steps) = &self.steps {
            if steps.is_empty() {
                return Err(config_invalid("steps: at least one step is required"));
            }
        }
        Ok(())
    }
}
