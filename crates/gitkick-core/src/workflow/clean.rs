use tracing::info;

use gitkick_git::GitGateway;

use super::Orchestrator;
use super::types::CleanOutcome;
use crate::errors::WorkflowError;

impl<G: GitGateway> Orchestrator<G> {
    /// Force-delete every local fallback branch.
    ///
    /// Stops at the first branch git refuses to delete; branches removed
    /// before that stay removed.
    pub fn clean(&self) -> Result<CleanOutcome, WorkflowError> {
        let prefix = &self.config.fallback_prefix;
        info!(event = "core.clean.started", prefix = %prefix);

        let branches = self.git.list_branches(prefix)?;

        let mut deleted = Vec::with_capacity(branches.len());
        for branch in branches {
            self.git.delete_branch(&branch)?;
            info!(event = "core.clean.branch_deleted", branch = %branch);
            deleted.push(branch);
        }

        info!(event = "core.clean.completed", deleted = deleted.len());
        Ok(CleanOutcome { deleted })
    }
}
