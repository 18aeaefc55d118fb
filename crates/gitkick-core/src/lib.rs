//! gitkick-core: workflows for squashing feature branches safely
//!
//! # Main Entry Points
//!
//! - [`workflow`] - squash, clean, commit and push orchestration
//! - [`config`] - workflow defaults
//! - [`errors`] - workflow errors and error codes

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod workflow;

// Re-export the gateway crate for consumers
pub use gitkick_git as git;

pub use config::WorkflowConfig;
pub use errors::{GitkickError, WorkflowError};
pub use workflow::{
    CleanOutcome, CommitOutcome, Orchestrator, PushOutcome, SquashOutcome, SquashRequest,
};

pub use logging::init_logging;
