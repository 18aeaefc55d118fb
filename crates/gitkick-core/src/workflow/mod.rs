//! Workflow orchestration over a [`GitGateway`].
//!
//! Every workflow runs synchronously to completion or to its first error.
//! Nothing is rolled back on failure: a fallback branch created before a
//! failing step stays in place as the recovery path.

mod clean;
mod commit;
mod squash;
pub mod types;


use gitkick_git::GitGateway;

use crate::config::WorkflowConfig;

pub use types::{CleanOutcome, CommitOutcome, PushOutcome, SquashOutcome, SquashRequest};

/// Sequences gateway calls into the user-facing workflows.
pub struct Orchestrator<G: GitGateway> {
    git: G,
    config: WorkflowConfig,
}

impl<G: GitGateway> Orchestrator<G> {
    pub fn new(git: G, config: WorkflowConfig) -> Self {
        Self { git, config }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }
}
