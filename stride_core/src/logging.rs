//! Logging setup for Stride.
//!
//! Reports go to stdout, so every subscriber installed here writes to stderr.
//! Rejected packages in the daily-steps entry point surface only through this
//! channel.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at INFO (overridable with RUST_LOG)
pub fn init() {
    init_with_level("info")
}

/// Initialize logging from a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn init_for_verbosity(verbosity: u8) {
    init_with_level(level_for_verbosity(verbosity))
}

/// Initialize logging with a specific default level
///
/// RUST_LOG still wins when it is set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(7), "trace");
    }
}
