//! Domain models for hs-deploy
//!
//! Plain data describing what a deployment is made of and what happened
//! when it ran. Nothing here spawns processes or touches the terminal.

pub mod outcome;
pub mod step;

pub use outcome::{DeployReport, FailurePolicy, StepStatus};
pub use step::Step;
