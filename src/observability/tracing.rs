//! Subscriber setup for paramshape's `tracing` events.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Environment variable read for filter directives.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Build the filter: `RUST_LOG` when set and valid, `default_directive`
/// otherwise.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a formatted subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init_tracing(default_directive: &str) -> bool {
    fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("paramshape=debug");
        assert!(!init_tracing("paramshape=debug"));
    }
}
