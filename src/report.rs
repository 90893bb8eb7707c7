//! Rendering a [`Verdict`] for standard output.
//!
//! The text format uses fixed Portuguese wording; graders grep for `FALHOU`
//! and `len(saída)`.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};

use crate::verify::{FragmentCheck, Verdict};

/// Report layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text report
    #[default]
    Text,
    /// Single JSON object
    Json,
}

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Install the choice as the process-wide `colored` override.
    pub fn apply(self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => {
                if !io::stdout().is_terminal() {
                    colored::control::set_override(false);
                }
            }
        }
    }
}

/// What to include in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Append a tally line after the verdict
    pub summary: bool,
    /// List contained fragments with their offsets
    pub show_contained: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    output_len: usize,
    fragment_count: usize,
    failures: Vec<&'a str>,
    fragments: &'a [FragmentCheck],
}

/// Write the report for `verdict` to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    verdict: &Verdict,
    options: &ReportOptions,
) -> io::Result<()> {
    match options.format {
        ReportFormat::Text => write_text(out, verdict, options),
        ReportFormat::Json => write_json(out, verdict),
    }
}

fn write_text<W: Write>(out: &mut W, verdict: &Verdict, options: &ReportOptions) -> io::Result<()> {
    if options.show_contained {
        for check in verdict.checks.iter() {
            if let Some(position) = check.position {
                let line = format!("contida: {} (posição {position})", check.fragment);
                writeln!(out, "{}", line.as_str().dimmed())?;
            }
        }
    }

    for failure in verdict.failures() {
        writeln!(
            out,
            "{} {} não está contida na saída",
            "FALHOU:".red().bold(),
            failure.fragment
        )?;
    }

    if verdict.all_contained() {
        writeln!(
            out,
            "{} todas as strings estão contidas na saída.",
            "OK:".green().bold()
        )?;
        writeln!(out, "len(saída) = {}", verdict.output_len)?;
    }

    if options.summary {
        writeln!(
            out,
            "resumo: {} fragmentos, {} contidos, {} falharam, soma dos comprimentos = {}",
            verdict.checks.len(),
            verdict.contained_count(),
            verdict.failure_count(),
            verdict.total_fragment_len()
        )?;
    }

    Ok(())
}

fn write_json<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    let report = JsonReport {
        passed: verdict.all_contained(),
        output_len: verdict.output_len,
        fragment_count: verdict.checks.len(),
        failures: verdict.failures().map(|c| c.fragment.as_str()).collect(),
        fragments: &verdict.checks,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
