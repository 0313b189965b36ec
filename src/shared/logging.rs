//! tracing subscriber setup for the CLI.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use super::config::{LogConfig, LogFormat};
use super::env_var::EnvVars;

/// Install the global subscriber, writing to stderr.
///
/// The filter comes from REVIEWKIT_LOG when set, else from `log.level`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(config: &LogConfig) -> WorkerGuard {
    let directive = EnvVars::load().log.unwrap_or_else(|| config.level.clone());
    let filter = build_filter(&directive);
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false);
    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    guard
}

/// Parse a filter directive, falling back to "warn" when it is invalid.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{directive}': {e}");
        EnvFilter::new("warn")
    })
}
