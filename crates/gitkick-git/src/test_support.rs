//! Test helpers for creating throwaway git repositories.
//!
//! These run the real `git` binary so tests exercise the same tool the
//! gateway shells out to.

use std::path::Path;

use crate::cli::run_git;
use crate::errors::GitError;

/// Run an arbitrary git command in `dir`, returning trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> Result<String, GitError> {
    run_git(dir, args)
}

/// Initialize a repository on branch `main` with a local identity and one commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    run_git(path, &["init", "-q"])?;
    run_git(path, &["checkout", "-q", "-b", "main"])?;
    run_git(path, &["config", "user.email", "test@test.com"])?;
    run_git(path, &["config", "user.name", "Test User"])?;
    run_git(path, &["config", "commit.gpgsign", "false"])?;
    commit_file(path, "README.md", "init", "Initial commit")
}

/// Write `name` with `contents`, stage it and commit with `message`.
pub fn commit_file(path: &Path, name: &str, contents: &str, message: &str) -> Result<(), GitError> {
    std::fs::write(path.join(name), contents)?;
    run_git(path, &["add", name])?;
    run_git(path, &["commit", "-q", "-m", message])?;
    Ok(())
}
