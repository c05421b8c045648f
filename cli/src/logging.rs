//! logging.rs
//! stderr subscriber for the command line tools.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build a filter from a level or a full directive string
/// (`"debug"`, `"info,record_core=trace"`). Falls back to `info`.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Output goes to stderr so stdout stays
/// free for record bytes or the parsed listing.
///
/// Colour codes are only written when stderr is a terminal.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
