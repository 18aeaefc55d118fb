use clap::ArgMatches;
use tracing::{error, info};

use gitkick_core::events;

use super::helpers::build_orchestrator;

pub(crate) fn handle_push_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build_orchestrator(matches);
    info!(
        event = "cli.push_started",
        remote = orchestrator.config().remote
    );

    match orchestrator.push() {
        Ok(outcome) => {
            if let Some(commit) = &outcome.commit {
                println!("✅ Committed pending changes: {}", commit.message);
            }
            println!("✅ Pushed '{}' to {}", outcome.branch, outcome.remote);
            info!(
                event = "cli.push_completed",
                branch = outcome.branch,
                remote = outcome.remote,
                committed = outcome.commit.is_some()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Push failed: {}", e);
            error!(event = "cli.push_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
