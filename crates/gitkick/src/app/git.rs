use clap::{Arg, ArgAction, Command};

use gitkick_core::config::{DEFAULT_COMPARE_BRANCH, DEFAULT_REMOTE};

fn remote_arg() -> Arg {
    Arg::new("remote")
        .long("remote")
        .value_name("NAME")
        .help(format!("Remote to push to (default: {DEFAULT_REMOTE})"))
}

pub fn squash_command() -> Command {
    Command::new("squash")
        .about("Squash the commits ahead of a base branch into one, keeping a fallback branch")
        .arg(
            Arg::new("compare")
                .long("compare")
                .short('c')
                .value_name("BRANCH")
                .help("Branch to squash against")
                .default_value(DEFAULT_COMPARE_BRANCH),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .value_name("TEXT")
                .help("Commit message (default: derived from the branch name)"),
        )
        .arg(
            Arg::new("push-force")
                .long("push-force")
                .help("Force-push the squashed branch afterwards")
                .action(ArgAction::SetTrue),
        )
        .arg(remote_arg())
}

pub fn clean_command() -> Command {
    Command::new("clean").about("Delete every local kk-fallback-* branch")
}

pub fn commit_command() -> Command {
    Command::new("commit")
        .about("Stage all changes and commit with a message derived from the branch")
}

pub fn push_command() -> Command {
    Command::new("push")
        .about("Commit pending changes if any, then push the current branch upstream")
        .arg(remote_arg())
}
