use clap::ArgMatches;
use tracing::{error, info};

use gitkick_core::events;

use super::helpers::{build_orchestrator, plural};

pub(crate) fn handle_clean_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.clean_started");

    let orchestrator = build_orchestrator(matches);

    match orchestrator.clean() {
        Ok(outcome) => {
            for branch in &outcome.deleted {
                println!("   Deleted {}", branch);
            }
            println!(
                "✅ Deleted {}",
                plural(outcome.count(), "fallback branch", "fallback branches")
            );
            info!(event = "cli.clean_completed", deleted = outcome.count());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Clean failed: {}", e);
            error!(event = "cli.clean_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
