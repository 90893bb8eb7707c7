mod cli;

use clap::Parser;
use colored::Colorize;
use ssp_checker::commands::check::EXIT_ERROR;
use ssp_checker::error::CheckError;
use std::process::ExitCode;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    ssp_checker::logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if let Some(hint) = err.downcast_ref::<CheckError>().and_then(CheckError::hint) {
                eprintln!("  {} {hint}", "expected:".dimmed());
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
