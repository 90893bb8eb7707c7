use anyhow::Result;
use ssp_checker::commands::check::{self, CheckArgs};
use ssp_checker::config::Settings;
use std::process::ExitCode;

use super::types::Cli;

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .apply_overrides(&cli.overrides());

    settings.report.color.apply();

    let args = CheckArgs {
        output_path: cli.output_path,
        spec_path: cli.spec_path,
        options: settings.report_options(),
    };
    let verdict = check::execute(&args)?;

    Ok(ExitCode::from(check::exit_code(
        &verdict,
        settings.verdict.strict_exit,
    )))
}
