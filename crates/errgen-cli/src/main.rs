//! errgen CLI.

use std::process::ExitCode;

use clap::Parser;
use errgen_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_generate, run_languages};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    let outcome = match &cli.command {
        Command::Generate(args) => run_generate(args).map(|result| print_summary(&result)),
        Command::Languages => run_languages(),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
