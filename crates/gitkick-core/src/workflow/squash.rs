use chrono::Utc;
use tracing::{info, warn};

use gitkick_git::{GitGateway, derive_commit_message, fallback_branch_name};

use super::Orchestrator;
use super::types::{SquashOutcome, SquashRequest};
use crate::errors::WorkflowError;

impl<G: GitGateway> Orchestrator<G> {
    /// Squash every commit ahead of the comparison branch into one.
    ///
    /// Preconditions (non-blank explicit message, clean tree, comparison differs
    /// from current, `HEAD~count` exists) are checked before anything is
    /// written. A fallback branch pointing at the original HEAD is created
    /// before the soft reset and is never removed here.
    pub fn squash(&self, request: &SquashRequest) -> Result<SquashOutcome, WorkflowError> {
        let compare_branch = request
            .compare_branch
            .clone()
            .unwrap_or_else(|| self.config.compare_branch.clone());

        info!(
            event = "core.squash.started",
            compare_branch = %compare_branch,
            push_force = request.push_force
        );

        if request
            .message
            .as_deref()
            .is_some_and(|message| message.trim().is_empty())
        {
            warn!(event = "core.squash.empty_message");
            return Err(WorkflowError::EmptyMessage);
        }

        let status = self.git.status()?;
        if !status.is_empty() {
            warn!(event = "core.squash.dirty_working_tree", status = %status);
            return Err(WorkflowError::DirtyWorkingTree { status });
        }

        let branch = self.git.current_branch()?;
        if branch == compare_branch {
            warn!(event = "core.squash.same_branch", branch = %branch);
            return Err(WorkflowError::SameBranch { branch });
        }

        let commits_ahead = self.git.commits_ahead(&compare_branch)?;
        info!(
            event = "core.squash.commits_counted",
            branch = %branch,
            compare_branch = %compare_branch,
            commits_ahead = commits_ahead
        );

        if commits_ahead <= 1 {
            info!(
                event = "core.squash.nothing_to_squash",
                branch = %branch,
                commits_ahead = commits_ahead
            );
            return Ok(SquashOutcome::NothingToSquash {
                branch,
                compare_branch,
                commits_ahead,
            });
        }

        if !self.git.has_ancestor(commits_ahead)? {
            warn!(
                event = "core.squash.unrelated_history",
                branch = %branch,
                compare_branch = %compare_branch,
                commits_ahead = commits_ahead
            );
            return Err(WorkflowError::UnrelatedHistory {
                branch,
                compare_branch,
                commits_ahead,
            });
        }

        let fallback_branch = fallback_branch_name(
            &self.config.fallback_prefix,
            &branch,
            Utc::now().timestamp(),
        );
        self.git.create_branch(&fallback_branch)?;
        info!(
            event = "core.squash.fallback_created",
            branch = %branch,
            fallback_branch = %fallback_branch
        );

        self.git.soft_reset(commits_ahead)?;
        info!(event = "core.squash.reset_completed", commits = commits_ahead);

        self.git.stage_all()?;
        info!(event = "core.squash.staged");

        let message = request
            .message
            .clone()
            .unwrap_or_else(|| derive_commit_message(&branch));
        self.git.commit(&message)?;
        info!(event = "core.squash.committed", message = %message);

        if request.push_force {
            self.git.push_force(&self.config.remote, &branch)?;
            info!(
                event = "core.squash.force_pushed",
                remote = %self.config.remote,
                branch = %branch
            );
        }

        info!(
            event = "core.squash.completed",
            branch = %branch,
            fallback_branch = %fallback_branch,
            squashed_commits = commits_ahead
        );

        Ok(SquashOutcome::Squashed {
            branch,
            compare_branch,
            fallback_branch,
            squashed_commits: commits_ahead,
            message,
            force_pushed: request.push_force,
        })
    }
}
