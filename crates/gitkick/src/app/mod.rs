mod git;
mod global;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(git::squash_command())
        .subcommand(git::clean_command())
        .subcommand(git::commit_command())
        .subcommand(git::push_command())
}
