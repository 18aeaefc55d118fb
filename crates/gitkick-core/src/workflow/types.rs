/// Parameters for [`super::Orchestrator::squash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquashRequest {
    /// Branch to count commits against; `None` uses the configured default.
    pub compare_branch: Option<String>,
    /// Explicit commit message; `None` derives one from the branch name.
    pub message: Option<String>,
    /// Force-push the squashed branch afterwards.
    pub push_force: bool,
}

impl SquashRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compare_branch(mut self, compare_branch: Option<String>) -> Self {
        self.compare_branch = compare_branch;
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn with_push_force(mut self, push_force: bool) -> Self {
        self.push_force = push_force;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquashOutcome {
    /// Zero or one commit ahead; the repository was not touched.
    NothingToSquash {
        branch: String,
        compare_branch: String,
        commits_ahead: usize,
    },
    Squashed {
        branch: String,
        compare_branch: String,
        fallback_branch: String,
        squashed_commits: usize,
        message: String,
        force_pushed: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    pub deleted: Vec<String>,
}

impl CleanOutcome {
    pub fn count(&self) -> usize {
        self.deleted.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub branch: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub branch: String,
    pub remote: String,
    /// Set when the working tree was dirty and got committed before pushing.
    pub commit: Option<CommitOutcome>,
}
