//! Version-control capability surface consumed by the workflows.

use crate::errors::GitError;

/// Named git operations the workflows are built from.
///
/// Every operation maps to exactly one `git` invocation in [`crate::CliGit`];
/// none retries. Tests substitute a recording double.
pub trait GitGateway {
    /// Name of the checked-out branch. Fails on a detached HEAD.
    fn current_branch(&self) -> Result<String, GitError>;

    /// Create `name` at HEAD without switching to it.
    fn create_branch(&self, name: &str) -> Result<(), GitError>;

    fn switch_branch(&self, name: &str) -> Result<(), GitError>;

    /// Number of commits on HEAD that are not on `target`.
    fn commits_ahead(&self, target: &str) -> Result<usize, GitError>;

    /// Whether `HEAD~count` resolves to a commit.
    fn has_ancestor(&self, count: usize) -> Result<bool, GitError>;

    /// Move HEAD back `count` commits, keeping index and working tree.
    fn soft_reset(&self, count: usize) -> Result<(), GitError>;

    fn stage_all(&self) -> Result<(), GitError>;

    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Push `branch` to `remote`, creating the upstream tracking ref if absent.
    fn push_upstream(&self, remote: &str, branch: &str) -> Result<(), GitError>;

    /// Like [`GitGateway::push_upstream`] but overwrites the remote branch.
    fn push_force(&self, remote: &str, branch: &str) -> Result<(), GitError>;

    /// Force-delete a local branch, merged or not.
    fn delete_branch(&self, name: &str) -> Result<(), GitError>;

    /// Local branches whose name starts with `prefix`.
    fn list_branches(&self, prefix: &str) -> Result<Vec<String>, GitError>;

    /// Porcelain status text; empty when the working tree is clean.
    fn status(&self) -> Result<String, GitError>;
}
