use std::error::Error;

use gitkick_git::GitError;

/// Base trait for all gitkick errors
pub trait GitkickError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as a warning rather than an error
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Working tree has uncommitted changes; commit or stash them first:\n{status}")]
    DirtyWorkingTree { status: String },

    #[error("Comparison branch '{branch}' is the current branch")]
    SameBranch { branch: String },

    #[error("Commit message must not be empty")]
    EmptyMessage,

    #[error(
        "'{branch}' and '{compare_branch}' share no history: \
         HEAD~{commits_ahead} does not exist"
    )]
    UnrelatedHistory {
        branch: String,
        compare_branch: String,
        commits_ahead: usize,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

impl GitkickError for GitError {
    fn error_code(&self) -> &'static str {
        match self {
            GitError::CommandFailed { .. } => "GIT_COMMAND_FAILED",
            GitError::SpawnFailed { .. } => "GIT_SPAWN_FAILED",
            GitError::DetachedHead => "GIT_DETACHED_HEAD",
            GitError::InvalidArgument { .. } => "GIT_INVALID_ARGUMENT",
            GitError::IoError { .. } => "GIT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            GitError::DetachedHead | GitError::InvalidArgument { .. }
        )
    }
}

impl GitkickError for WorkflowError {
    fn error_code(&self) -> &'static str {
        match self {
            WorkflowError::DirtyWorkingTree { .. } => "DIRTY_WORKING_TREE",
            WorkflowError::SameBranch { .. } => "SAME_BRANCH",
            WorkflowError::EmptyMessage => "EMPTY_MESSAGE",
            WorkflowError::UnrelatedHistory { .. } => "UNRELATED_HISTORY",
            WorkflowError::Git(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            WorkflowError::DirtyWorkingTree { .. }
            | WorkflowError::SameBranch { .. }
            | WorkflowError::EmptyMessage
            | WorkflowError::UnrelatedHistory { .. } => true,
            WorkflowError::Git(e) => e.is_user_error(),
        }
    }
}
