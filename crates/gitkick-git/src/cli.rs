//! [`GitGateway`] backed by the system `git` binary.
//!
//! The git CLI inherits the user's SSH agent, credential helpers and hooks, so
//! push and commit behave exactly as they would in the user's shell.
//!
//! Each operation is one blocking `git` invocation with no timeout. Output is
//! trimmed; a non-zero exit becomes [`GitError::CommandFailed`] carrying git's
//! own output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::errors::GitError;
use crate::gateway::GitGateway;
use crate::validation::validate_git_arg;

/// Run `git <args>` in `dir` and return its trimmed stdout.
pub(crate) fn run_git(dir: &Path, args: &[&str]) -> Result<String, GitError> {
    let command = args.join(" ");

    debug!(
        event = "git.cli.command_started",
        command = %command,
        path = %dir.display()
    );

    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(|e| GitError::SpawnFailed {
            command: command.clone(),
            source: e,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if output.status.success() {
        debug!(event = "git.cli.command_completed", command = %command);
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let combined = match (stderr.is_empty(), stdout.is_empty()) {
        (false, false) => format!("{stderr}\n{stdout}"),
        (false, true) => stderr,
        (true, _) => stdout,
    };

    warn!(
        event = "git.cli.command_failed",
        command = %command,
        code = ?output.status.code(),
        output = %combined
    );

    Err(GitError::CommandFailed {
        command,
        code: output.status.code(),
        output: combined,
    })
}

/// Split a listing into non-empty trimmed lines.
fn non_empty_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parse `git branch --list` output, dropping the current (`*`) and
/// checked-out-in-worktree (`+`) markers.
fn parse_branch_list(output: &str) -> Vec<String> {
    non_empty_lines(output)
        .map(|line| {
            line.strip_prefix(['*', '+'])
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Gateway that shells out to `git` inside a repository directory.
#[derive(Debug, Clone)]
pub struct CliGit {
    dir: PathBuf,
}

impl CliGit {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        run_git(&self.dir, args)
    }
}

impl GitGateway for CliGit {
    fn current_branch(&self) -> Result<String, GitError> {
        let branch = self.run(&["branch", "--show-current"])?;
        if branch.is_empty() {
            return Err(GitError::DetachedHead);
        }
        Ok(branch)
    }

    fn create_branch(&self, name: &str) -> Result<(), GitError> {
        validate_git_arg(name, "branch name")?;
        self.run(&["branch", name])?;
        info!(event = "git.branch.create_completed", branch = name);
        Ok(())
    }

    fn switch_branch(&self, name: &str) -> Result<(), GitError> {
        validate_git_arg(name, "branch name")?;
        self.run(&["switch", name])?;
        info!(event = "git.branch.switch_completed", branch = name);
        Ok(())
    }

    fn commits_ahead(&self, target: &str) -> Result<usize, GitError> {
        validate_git_arg(target, "comparison branch")?;
        let listing = self.run(&["cherry", "-v", target])?;
        Ok(non_empty_lines(&listing).count())
    }

    fn has_ancestor(&self, count: usize) -> Result<bool, GitError> {
        let target = format!("HEAD~{count}^{{commit}}");
        match self.run(&["rev-parse", "--verify", "--quiet", &target]) {
            Ok(_) => Ok(true),
            // `--verify --quiet` exits 1 without output when the revision is missing.
            Err(GitError::CommandFailed { code: Some(1), .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn soft_reset(&self, count: usize) -> Result<(), GitError> {
        let target = format!("HEAD~{count}");
        self.run(&["reset", "--soft", &target])?;
        info!(event = "git.reset.soft_completed", count = count);
        Ok(())
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "--all"])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message])?;
        info!(event = "git.commit.completed", message = message);
        Ok(())
    }

    fn push_upstream(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        validate_git_arg(remote, "remote name")?;
        validate_git_arg(branch, "branch name")?;
        self.run(&["push", "--set-upstream", remote, branch])?;
        info!(event = "git.push.completed", remote = remote, branch = branch);
        Ok(())
    }

    fn push_force(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        validate_git_arg(remote, "remote name")?;
        validate_git_arg(branch, "branch name")?;
        self.run(&["push", "--force", "--set-upstream", remote, branch])?;
        info!(
            event = "git.push.force_completed",
            remote = remote,
            branch = branch
        );
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> Result<(), GitError> {
        validate_git_arg(name, "branch name")?;
        self.run(&["branch", "-D", name])?;
        Ok(())
    }

    fn list_branches(&self, prefix: &str) -> Result<Vec<String>, GitError> {
        validate_git_arg(prefix, "branch prefix")?;
        let pattern = format!("{prefix}*");
        let listing = self.run(&["branch", "--list", &pattern])?;
        Ok(parse_branch_list(&listing))
    }

    fn status(&self) -> Result<String, GitError> {
        self.run(&["status", "--porcelain"])
    }
}
