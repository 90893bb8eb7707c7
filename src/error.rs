//! Error taxonomy for reading checker inputs.
//!
//! Only operational failures live here. A fragment that is missing from the
//! candidate output is a verdict, not an error, and is recorded in
//! [`crate::verify::Verdict`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an input file could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    /// The output file has no lines at all
    #[error("file is empty, there is no first line to use as the output string")]
    EmptyOutput,
    /// The first line of the fragment list is not a non-negative integer
    #[error("first line {line:?} is not a non-negative integer count")]
    InvalidCount { line: String },
    /// The file ended before the declared number of fragments was read
    #[error("declared {declared} fragments but only {found} lines follow the count")]
    MissingFragments { declared: usize, found: usize },
    /// A line could not be decoded as UTF-8 (1-based line number)
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// Failure to obtain the output string or the fragment list.
#[derive(Debug, Error)]
pub enum CheckError {
    /// File missing, unreadable, or permission denied
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File readable but not in the expected shape
    #[error("malformed input '{}': {issue}", path.display())]
    Format { path: PathBuf, issue: FormatIssue },
}

impl CheckError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn format(path: &Path, issue: FormatIssue) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            issue,
        }
    }

    /// The path of the file that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }

    /// Description of the expected file layout, for format errors.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Format {
                issue: FormatIssue::EmptyOutput,
                ..
            } => Some("the output file must contain the candidate string on its first line"),
            Self::Format { .. } => Some(
                "the fragment list must start with a count n, followed by n lines with one fragment each",
            ),
        }
    }
}
