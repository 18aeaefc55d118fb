use tracing::info;

use gitkick_git::{GitGateway, derive_commit_message};

use super::Orchestrator;
use super::types::{CommitOutcome, PushOutcome};
use crate::errors::WorkflowError;

impl<G: GitGateway> Orchestrator<G> {
    /// Stage everything and commit with a message derived from the branch name.
    pub fn commit(&self) -> Result<CommitOutcome, WorkflowError> {
        let branch = self.git.current_branch()?;
        info!(event = "core.commit.started", branch = %branch);

        self.git.stage_all()?;

        let message = derive_commit_message(&branch);
        self.git.commit(&message)?;

        info!(
            event = "core.commit.completed",
            branch = %branch,
            message = %message
        );
        Ok(CommitOutcome { branch, message })
    }

    /// Push the current branch upstream, committing pending changes first.
    pub fn push(&self) -> Result<PushOutcome, WorkflowError> {
        info!(event = "core.push.started", remote = %self.config.remote);

        let status = self.git.status()?;
        let commit = if status.is_empty() {
            None
        } else {
            info!(event = "core.push.dirty_working_tree");
            Some(self.commit()?)
        };

        let branch = self.git.current_branch()?;
        self.git.push_upstream(&self.config.remote, &branch)?;

        info!(
            event = "core.push.completed",
            remote = %self.config.remote,
            branch = %branch,
            committed = commit.is_some()
        );
        Ok(PushOutcome {
            branch,
            remote: self.config.remote.clone(),
            commit,
        })
    }
}
