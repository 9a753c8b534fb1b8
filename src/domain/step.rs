//! Step domain type
//!
//! A step is one external command in the deployment sequence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid};

/// One external command invocation within the deployment sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Short identifier (e.g., "install", "serve")
    pub id: String,

    /// Status line printed before the step is spawned
    pub announce: String,

    /// Program to execute, resolved through PATH
    pub program: String,

    /// Arguments passed verbatim to the program
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory, relative to the project directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Step {
    /// Create a step with no arguments
    pub fn new(
        id: impl Into<String>,
        announce: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            announce: announce.into(),
            program: program.into(),
            args: Vec::new(),
            dir: None,
        }
    }

    /// Replace the argument list
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Program and arguments joined for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(config_invalid("Step id cannot be empty"));
        }
        if self.program.trim().is_empty() {
            return Err(config_invalid(format!(
                "Step '{}' has no program",
                self.id
            )));
        }
        Ok(())
    }
}
