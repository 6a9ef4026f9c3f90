use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TERCO_LOG=warn`.
pub const LOG_ENV: &str = "TERCO_LOG";

const DEFAULT_FILTER: &str = "info";

/// Sends log events to stderr so that stdout carries only the converted theme.
/// Lines carry the bare message, with no time, level or target.
///
/// Must be called once, before any event is logged.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_level(false)
        .with_target(false)
        .without_time()
        .init();
}
