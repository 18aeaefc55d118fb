use clap::ArgMatches;
use tracing::error;

use gitkick_core::events;

mod clean;
mod commit;
mod helpers;
mod push;
mod squash;

use clean::handle_clean_command;
use commit::handle_commit_command;
use push::handle_push_command;
use squash::handle_squash_command;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("squash", sub_matches)) => handle_squash_command(sub_matches),
        Some(("clean", sub_matches)) => handle_clean_command(sub_matches),
        Some(("commit", sub_matches)) => handle_commit_command(sub_matches),
        Some(("push", sub_matches)) => handle_push_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            eprintln!("Unknown command");
            Err("Unknown command".into())
        }
    }
}
