use clap::ArgMatches;
use tracing::{error, info};

use gitkick_core::events;

use super::helpers::build_orchestrator;

pub(crate) fn handle_commit_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.commit_started");

    let orchestrator = build_orchestrator(matches);

    match orchestrator.commit() {
        Ok(outcome) => {
            println!("✅ Committed on '{}': {}", outcome.branch, outcome.message);
            info!(
                event = "cli.commit_completed",
                branch = outcome.branch,
                message = outcome.message
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Commit failed: {}", e);
            error!(event = "cli.commit_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
