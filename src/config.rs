//! Optional TOML settings for the checker.
//!
//! ```toml
//! [report]
//! format = "json"
//! color = "never"
//! summary = true
//! show_contained = false
//!
//! [verdict]
//! strict_exit = true
//! ```
//!
//! Every key is optional. Command-line flags are applied on top with
//! [`Settings::apply_overrides`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::report::{ColorChoice, ReportFormat, ReportOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub report: ReportSettings,
    pub verdict: VerdictSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub color: ColorChoice,
    pub summary: bool,
    pub show_contained: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerdictSettings {
    /// Exit with status 1 when any fragment is missing
    pub strict_exit: bool,
}

/// Values given on the command line.
///
/// `None` and `false` leave the file setting untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<ReportFormat>,
    pub color: Option<ColorChoice>,
    pub summary: bool,
    pub show_contained: bool,
    pub strict_exit: bool,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid checker settings")
    }

    pub fn apply_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(format) = overrides.format {
            self.report.format = format;
        }
        if let Some(color) = overrides.color {
            self.report.color = color;
        }
        self.report.summary |= overrides.summary;
        self.report.show_contained |= overrides.show_contained;
        self.verdict.strict_exit |= overrides.strict_exit;
        self
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.report.format,
            summary: self.report.summary,
            show_contained: self.report.show_contained,
        }
    }
}
