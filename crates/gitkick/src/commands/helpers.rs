use clap::ArgMatches;

use gitkick_core::git::CliGit;
use gitkick_core::{Orchestrator, WorkflowConfig};

/// Build the orchestrator for the repository selected by the global `-C` flag,
/// applying a `--remote` override when the subcommand has one.
pub(crate) fn build_orchestrator(matches: &ArgMatches) -> Orchestrator<CliGit> {
    let directory = matches
        .get_one::<String>("directory")
        .map(String::as_str)
        .unwrap_or(".");

    let remote = matches
        .try_get_one::<String>("remote")
        .ok()
        .flatten()
        .cloned();

    let config = WorkflowConfig::default().with_remote(remote);
    Orchestrator::new(CliGit::new(directory), config)
}

/// `1 commit` / `3 commits`
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}
