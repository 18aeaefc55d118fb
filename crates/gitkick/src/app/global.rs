use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("gitkick")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Squash feature branches safely, then commit and push")
        .long_about("gitkick squashes the commits a feature branch has ahead of its base into one, after saving the original history on a kk-fallback-* branch. Commit messages are derived from ticket-style branch names such as ccs-123-fix-login-bug.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .value_name("PATH")
                .help("Run as if started in PATH instead of the current directory")
                .default_value(".")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
