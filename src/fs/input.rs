//! Reading the candidate output and the fragment list.
//!
//! Both files are line oriented. Only the line terminator is removed from each
//! line (`\n`, or `\r\n`); every other character, including trailing spaces, is
//! part of the value.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::{CheckError, FormatIssue};

/// Upper bound for the initial fragment allocation, so a bogus count cannot
/// reserve memory before any line is read.
const MAX_PREALLOCATED_FRAGMENTS: usize = 4096;

/// Read the candidate output string from the first line of `path`.
///
/// # Errors
/// * [`CheckError::Io`] if the file cannot be opened or read
/// * [`CheckError::Format`] if the file has no lines
pub fn read_candidate(path: &Path) -> Result<String, CheckError> {
    let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
    let candidate = parse_candidate(BufReader::new(file), path)?;
    debug!(path = %path.display(), bytes = candidate.len(), "read candidate output");
    Ok(candidate)
}

/// Read the fragment list (`n`, then `n` fragment lines) from `path`.
///
/// Lines after the `n`-th fragment are not read.
pub fn read_fragments(path: &Path) -> Result<Vec<String>, CheckError> {
    let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
    let fragments = parse_fragments(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = fragments.len(), "read fragment list");
    Ok(fragments)
}

/// Parse the candidate output from any buffered reader.
///
/// `source` is only used to label errors.
pub fn parse_candidate<R: BufRead>(mut reader: R, source: &Path) -> Result<String, CheckError> {
    let mut line = String::new();
    if next_line(&mut reader, &mut line, source, 1)? == 0 {
        return Err(CheckError::format(source, FormatIssue::EmptyOutput));
    }
    Ok(strip_line_terminator(&line).to_string())
}

/// Parse a fragment list from any buffered reader.
pub fn parse_fragments<R: BufRead>(
    mut reader: R,
    source: &Path,
) -> Result<Vec<String>, CheckError> {
    let mut line = String::new();
    next_line(&mut reader, &mut line, source, 1)?;
    let header = strip_line_terminator(&line);
    let count = parse_count(header).ok_or_else(|| {
        CheckError::format(
            source,
            FormatIssue::InvalidCount {
                line: header.to_string(),
            },
        )
    })?;

    let mut fragments = Vec::with_capacity(count.min(MAX_PREALLOCATED_FRAGMENTS));
    for index in 0..count {
        line.clear();
        if next_line(&mut reader, &mut line, source, index + 2)? == 0 {
            return Err(CheckError::format(
                source,
                FormatIssue::MissingFragments {
                    declared: count,
                    found: index,
                },
            ));
        }
        fragments.push(strip_line_terminator(&line).to_string());
    }

    Ok(fragments)
}

/// Parse the fragment count. Surrounding whitespace is ignored.
fn parse_count(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

/// Remove one trailing `\n` and a `\r` directly before it.
pub fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Read one line into `buf`, mapping decode failures to a format error.
fn next_line<R: BufRead>(
    reader: &mut R,
    buf: &mut String,
    source: &Path,
    line_number: usize,
) -> Result<usize, CheckError> {
    reader.read_line(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            CheckError::format(source, FormatIssue::InvalidUtf8 { line: line_number })
        } else {
            CheckError::io(source, e)
        }
    })
}
