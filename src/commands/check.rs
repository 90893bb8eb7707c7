//! The check command: read both inputs, test containment, print the report.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::fs::{read_candidate, read_fragments};
use crate::report::{write_report, ReportOptions};
use crate::verify::{check_containment, Verdict};

/// The run completed. Used for every verdict unless strict exit is enabled.
pub const EXIT_OK: u8 = 0;
/// Strict mode only: at least one fragment is missing.
pub const EXIT_FRAGMENTS_MISSING: u8 = 1;
/// An input could not be read or parsed.
pub const EXIT_ERROR: u8 = 2;

#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// File whose first line is the candidate output string
    pub output_path: PathBuf,
    /// File with the fragment count and fragments
    pub spec_path: PathBuf,
    pub options: ReportOptions,
}

/// Run the check and print the report to stdout.
pub fn execute(args: &CheckArgs) -> Result<Verdict> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}

/// Run the check, writing the report to `out`.
///
/// Both files are read before anything is written, so an input error leaves
/// `out` untouched.
pub fn run<W: Write>(args: &CheckArgs, out: &mut W) -> Result<Verdict> {
    let output = read_candidate(&args.output_path)?;
    let fragments = read_fragments(&args.spec_path)?;

    let verdict = check_containment(&output, &fragments);
    info!(
        fragments = verdict.checks.len(),
        missing = verdict.failure_count(),
        output_len = verdict.output_len,
        "containment check finished"
    );

    write_report(out, &verdict, &args.options).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(verdict)
}

/// Process exit status for a completed run.
pub fn exit_code(verdict: &Verdict, strict: bool) -> u8 {
    if strict && !verdict.all_contained() {
        EXIT_FRAGMENTS_MISSING
    } else {
        EXIT_OK
    }
}
