//! Logging setup for the mdb shell.
//!
//! Log lines go to stderr so they never interleave with command results on
//! stdout. `RUST_LOG` takes precedence over the configured level.

use crate::config::{LogMode, LoggerConfig};
use tracing_subscriber::EnvFilter;

/// Builds the level filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &LoggerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global subscriber.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init(config: &LoggerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);

    let result = match config.log_mode() {
        LogMode::Devel => builder
            .with_ansi(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        LogMode::Prod => builder
            .with_ansi(false)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: logging already initialised: {e}");
    }
}
