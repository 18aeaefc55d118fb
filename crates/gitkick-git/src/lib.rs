//! gitkick-git: the git CLI gateway used by gitkick workflows.
//!
//! - [`GitGateway`] - capability trait the workflows depend on
//! - [`CliGit`] - implementation that shells out to the system `git`
//! - [`naming`] - fallback branch names and commit-message derivation

pub mod cli;
pub mod errors;
pub mod gateway;
pub mod naming;
pub mod test_support;
pub mod validation;

pub use cli::CliGit;
pub use errors::GitError;
pub use gateway::GitGateway;
pub use naming::{FALLBACK_BRANCH_PREFIX, derive_commit_message, fallback_branch_name};
pub use validation::validate_git_arg;
