mod commands;
mod terminal;

use std::process::ExitCode;

use clap::CommandFactory;
use commands::{CommandLine, Commands, completion, generate};
use ginmake_common::config::Config;
use tracing::error;

use crate::terminal::logging;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging();

    let result: anyhow::Result<()> = match commands.command {
        Some(Commands::Generate { name }) => generate::generate(&name, &cfg),
        Some(Commands::Completion { shell }) => {
            completion::completion(shell);
            Ok(())
        }
        None => match commands.generate {
            Some(name) => generate::generate(&name, &cfg),
            None => CommandLine::command().print_help().map_err(Into::into),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
