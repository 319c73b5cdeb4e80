//! # Command Line Interface
//!
//! The subcommands are in the `commands` module of the library.
//! The command definitions are in `cli.rs`, which is shared with the build script
//! so that shell completions can be generated.

use env_logger;
#[cfg(windows)]
use colored;
use pyasm::commands;
use pyasm::commands::CommandError;

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("highlight",cmd)) => commands::langx::highlight(cmd),
        Some(("indent",cmd)) => commands::langx::indent(cmd),
        Some(("comment",cmd)) => commands::langx::comment(cmd),
        Some(("mnemonics",_)) => commands::langx::mnemonics(),
        _ => {
            log::error!("no subcommand was found, try `pyasm --help`");
            Err(Box::new(CommandError::InvalidCommand))
        }
    }
}
