mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::breakdown_cmd::breakdown_command;
use crate::commands::init_profile_cmd::init_profile_command;
use crate::commands::report_cmd::report_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_tracing(args.verbose);

    let result = match args.command {
        Commands::Simulate {
            input,
            output,
            trials,
            seed,
            format,
        } => simulate_command(&input, &output, trials, seed, format),
        Commands::Report {
            input,
            output,
            trials,
            seed,
        } => report_command(&input, output.as_deref(), trials, seed),
        Commands::Breakdown { input } => breakdown_command(&input),
        Commands::InitProfile { output } => init_profile_command(&output),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
