use clap::error::ErrorKind;
use gitkick_core::init_logging;

mod app;
mod commands;

fn main() {
    let matches = match app::build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(e) => {
            // Usage errors go to stdout with a hint, and always exit 1.
            println!("{}", e.render());
            println!("usage: gitkick <command>");
            std::process::exit(1);
        }
    };

    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if let Err(e) = commands::run_command(&matches) {
        // Error already printed to the user by the command handler.
        drop(e);
        std::process::exit(1);
    }
}
