//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::EnvFilter;

/// Filter used when no `-v` flag is given and `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive for a `-v` count, `None` when no flag was given.
pub fn verbosity_filter(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the global subscriber.
///
/// An explicit `-v` wins over `RUST_LOG`. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = match verbosity_filter(verbosity) {
        Some(directive) => EnvFilter::new(directive),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
