//! Configuration file handling for hs-deploy
//!
//! This module contains data structures for:
//! - `hs-deploy.yaml` - Deployment configuration (optional)
//! - Data source selection for the data setup step

pub mod data_source;
pub mod deploy;

// Re-export commonly used types
pub use data_source::DataSource;
pub use deploy::DeployConfig;

/// Configuration file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "hs-deploy.yaml";
