//! Error types and handling for hs-deploy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`config`]: Configuration and project directory errors
//! - [`step`]: Step execution errors

pub mod config;
pub mod step;

pub use config::{
    already_exists as config_exists, invalid as config_invalid, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
pub use step::{failed as step_failed, spawn_failed as step_spawn_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hs-deploy operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeployError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(hs_deploy::config::not_found),
        help("Pass an existing file with --config, or omit it to use the built-in plan")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(hs_deploy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(hs_deploy::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(hs_deploy::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Configuration file already exists: {path}")]
    #[diagnostic(
        code(hs_deploy::config::already_exists),
        help("Use --force to overwrite it")
    )]
    ConfigExists { path: String },

    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(hs_deploy::config::project_dir_not_found),
        help("Point --project-dir at the directory containing app.py and requirements.txt")
    )]
    ProjectDirNotFound { path: String },

    #[error("Unknown data source: {value}")]
    #[diagnostic(
        code(hs_deploy::config::invalid_data_source),
        help("Valid data sources: quick, scrape, official")
    )]
    InvalidDataSource { value: String },

    // Step errors
    #[error("Step '{step}' failed with exit code {code}")]
    #[diagnostic(
        code(hs_deploy::step::failed),
        help("Fix the failing step, or run without --halt-on-failure to continue past it")
    )]
    StepFailed { step: String, code: i32 },

    #[error("Failed to start step '{step}' ({program}): {reason}")]
    #[diagnostic(
        code(hs_deploy::step::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    StepSpawnFailed {
        step: String,
        program: String,
        reason: String,
    },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(hs_deploy::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Output errors
    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(hs_deploy::output::serialization_failed))]
    SerializationFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(hs_deploy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        DeployError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeployError {
    fn from(err: serde_yaml::Error) -> Self {
        DeployError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        DeployError::SerializationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = DeployError::StepFailed {
            step: "process-data".to_string(),
            code: 1,
        };
        assert_eq!(
            err.to_string(),
            "Step 'process-data' failed with exit code 1"
        );
    }

    #[test]
    fn test_error_code() {
        let err = DeployError::ConfigNotFound {
            path: "hs-deploy.yaml".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("hs_deploy::config::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let deploy_err: DeployError = io_err.into();
        assert!(matches!(deploy_err, DeployError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let deploy_err: DeployError = parse_result.unwrap_err().into();
        assert!(matches!(deploy_err, DeployError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let deploy_err: DeployError = parse_result.unwrap_err().into();
        assert!(matches!(deploy_err, DeployError::SerializationFailed { .. }));
    }

    test_error_contains!(
        test_invalid_data_source_error,
        DeployError::InvalidDataSource {
            value: "ftp".to_string()
        },
        "Unknown data source",
        "ftp"
    );

    test_error_contains!(
        test_project_dir_not_found_error,
        DeployError::ProjectDirNotFound {
            path: "/nowhere".to_string()
        },
        "Project directory not found"
    );

    test_error_contains!(
        test_unsupported_shell_error,
        DeployError::UnsupportedShell {
            shell: "tcsh".to_string()
        },
        "Unsupported shell",
        "tcsh"
    );

    #[test]
    fn test_config_constructors() {
        assert!(matches!(
            config_not_found("a.yaml"),
            DeployError::ConfigNotFound { .. }
        ));
        assert!(matches!(
            config_read_failed("a.yaml", "denied"),
            DeployError::ConfigReadFailed { .. }
        ));
        assert!(matches!(
            config_parse_failed("a.yaml", "bad"),
            DeployError::ConfigParseFailed { .. }
        ));
        assert!(matches!(
            config_exists("hs-deploy.yaml"),
            DeployError::ConfigExists { .. }
        ));
        assert!(
            config_invalid("empty plan")
                .to_string()
                .contains("Invalid configuration")
        );
    }

    #[test]
    fn test_step_constructors() {
        let err = step_failed("install", 2);
        assert!(err.to_string().contains("exit code 2"));

        let err = step_spawn_failed("serve", "streamlit", "No such file or directory");
        assert!(matches!(err, DeployError::StepSpawnFailed { .. }));
        assert!(err.to_string().contains("streamlit"));
    }
}
