//! Command implementations for hs-deploy CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod plan;
pub mod run;
pub mod version;
