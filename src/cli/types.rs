use clap::{ArgAction, Parser};
use ssp_checker::config::Overrides;
use ssp_checker::report::{ColorChoice, ReportFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssp-checker")]
#[command(
    about = "Check that every fragment of a superstring instance is contained in a candidate output",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// File whose first line is the candidate output string
    pub output_path: PathBuf,

    /// Fragment list: a count n on the first line, then n fragments, one per line
    pub spec_path: PathBuf,

    /// Report format (default: text)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Append a summary line with fragment counts
    #[arg(long)]
    pub summary: bool,

    /// Also list contained fragments with their character offset
    #[arg(long)]
    pub show_contained: bool,

    /// Exit with status 1 when any fragment is missing
    #[arg(long)]
    pub strict: bool,

    /// When to use colours (default: auto)
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Load settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            color: self.color,
            summary: self.summary,
            show_contained: self.show_contained,
            strict_exit: self.strict,
        }
    }
}
