use clap::ArgMatches;
use tracing::{error, info};

use gitkick_core::{SquashOutcome, SquashRequest, events};

use super::helpers::{build_orchestrator, plural};

pub(crate) fn handle_squash_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let compare_branch = matches.get_one::<String>("compare").cloned();
    let message = matches.get_one::<String>("message").cloned();
    let push_force = matches.get_flag("push-force");

    info!(
        event = "cli.squash_started",
        compare_branch = ?compare_branch,
        push_force = push_force
    );

    let orchestrator = build_orchestrator(matches);
    let request = SquashRequest::new()
        .with_compare_branch(compare_branch)
        .with_message(message)
        .with_push_force(push_force);

    match orchestrator.squash(&request) {
        Ok(SquashOutcome::NothingToSquash {
            branch,
            compare_branch,
            commits_ahead,
        }) => {
            println!(
                "Nothing to squash: '{}' is {} ahead of '{}'.",
                branch,
                plural(commits_ahead, "commit", "commits"),
                compare_branch
            );
            info!(
                event = "cli.squash_completed",
                branch = branch,
                squashed = false
            );
            Ok(())
        }
        Ok(SquashOutcome::Squashed {
            branch,
            compare_branch,
            fallback_branch,
            squashed_commits,
            message,
            force_pushed,
        }) => {
            println!(
                "✅ Squashed {} on '{}' against '{}'",
                plural(squashed_commits, "commit", "commits"),
                branch,
                compare_branch
            );
            println!("   Message: {}", message);
            println!("   Fallback: {}", fallback_branch);
            if force_pushed {
                println!("   Force-pushed to {}", orchestrator.config().remote);
            }
            info!(
                event = "cli.squash_completed",
                branch = branch,
                squashed = true,
                fallback_branch = fallback_branch
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Squash failed: {}", e);
            error!(event = "cli.squash_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
