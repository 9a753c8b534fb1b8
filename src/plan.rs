//! Deployment plan construction
//!
//! The stock plan is five steps: install dependencies, set up data, process
//! data into embeddings, set up the vector database, serve the web app.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::DeployConfig;
use crate::domain::Step;
use crate::error::{Result, config_invalid};

pub const INSTALL: &str = "install";
pub const SETUP_DATA: &str = "setup-data";
pub const PROCESS_DATA: &str = "process-data";
pub const SETUP_VECTOR_DB: &str = "setup-vector-db";
pub const SERVE: &str = "serve";

/// Ordered steps for one deployment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentPlan {
    pub steps: Vec<Step>,
}

impl DeploymentPlan {
    /// Build the plan described by a configuration
    pub fn from_config(config: &DeployConfig) -> Result<Self> {
        let steps = match &config.steps {
            Some(steps) => steps.clone(),
            None => default_steps(config),
        };
        let plan = Self { steps };
        plan.validate()?;
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(config_invalid("Deployment plan has no steps"));
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            step.validate()?;
            if !seen.insert(step.id.as_str()) {
                return Err(config_invalid(format!("Duplicate step id '{}'", step.id)));
            }
        }
        Ok(())
    }
}

fn default_steps(config: &DeployConfig) -> Vec<Step> {
    vec![
        Step::new(INSTALL, "Installing dependencies...", &config.pip)
            .with_args(["install", "-r", config.manifest.as_str()]),
        Step::new(SETUP_DATA, "Setting up data...", &config.python)
            .with_args([config.data_source.script()]),
        Step::new(
            PROCESS_DATA,
            "Processing data and generating embeddings...",
            &config.python,
        )
        .with_args(["run_processing.py"]),
        Step::new(
            SETUP_VECTOR_DB,
            "Setting up vector database...",
            &config.python,
        )
        .with_args(["run_vector_setup.py"]),
        Step::new(SERVE, "Starting web application...", &config.streamlit).with_args([
            "run".to_string(),
            config.app.clone(),
            "--server.port".to_string(),
            config.server.port.to_string(),
            "--server.address".to_string(),
            config.server.address.clone(),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataSource;

    fn ids(plan: &DeploymentPlan) -> Vec<&str> {
        plan.steps.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_default_plan_order() {
        let plan = DeploymentPlan::from_config(&DeployConfig::default()).unwrap();
        assert_eq!(
            ids(&plan),
            vec![INSTALL, SETUP_DATA, PROCESS_DATA, SETUP_VECTOR_DB, SERVE]
        );
    }

    #[test]
    fn test_default_install_reads_manifest() {
        let plan = DeploymentPlan::from_config(&DeployConfig::default()).unwrap();
        assert_eq!(plan.steps[0].program, "pip");
        assert_eq!(plan.steps[0].args, vec!["install", "-r", "requirements.txt"]);
    }

    #[test]
    fn test_default_serve_binds_all_interfaces_on_8501() {
        let plan = DeploymentPlan::from_config(&DeployConfig::default()).unwrap();
        let serve = &plan.steps[4];
        assert_eq!(serve.program, "streamlit");
        assert_eq!(
            serve.args,
            vec![
                "run",
                "app.py",
                "--server.port",
                "8501",
                "--server.address",
                "0.0.0.0"
            ]
        );
    }

    #[test]
    fn test_middle_steps_take_no_arguments_beyond_script() {
        let plan = DeploymentPlan::from_config(&DeployConfig::default()).unwrap();
        for step in &plan.steps[1..4] {
            assert_eq!(step.program, "python");
            assert_eq!(step.args.len(), 1);
        }
    }

    #[test]
    fn test_data_source_selects_setup_script() {
        let config = DeployConfig {
            data_source: DataSource::Scrape,
            ..DeployConfig::default()
        };
        let plan = DeploymentPlan::from_config(&config).unwrap();
        assert_eq!(plan.steps[1].args, vec!["run_scrapers.py"]);
    }

    #[test]
    fn test_explicit_steps_replace_default_plan() {
        let config = DeployConfig {
            steps: Some(vec![Step::new("only", "Only step...", "true")]),
            ..DeployConfig::default()
        };
        let plan = DeploymentPlan::from_config(&config).unwrap();
        assert_eq!(ids(&plan), vec!["only"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let config = DeployConfig {
            steps: Some(vec![
                Step::new("a", "A...", "true"),
                Step::new("a", "A again...", "true"),
            ]),
            ..DeployConfig::default()
        };
        let err = DeploymentPlan::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Duplicate step id 'a'"));
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let plan = DeploymentPlan::from_config(&DeployConfig::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["steps"][4]["id"], "serve");
        assert!(json["steps"][0].get("dir").is_none());
    }
}
