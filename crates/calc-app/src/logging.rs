//! Tracing setup. Logs go to stderr; stdout carries only the calculator.

use std::io;

use calc_config::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Filter precedence: `--log-level`, then `RUST_LOG`, then the config level.
pub fn env_filter(cli_level: Option<&str>, config_level: LogLevel) -> EnvFilter {
    if let Some(directive) = cli_level {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid --log-level {directive:?}: {e}"),
        }
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config_level.as_directive()))
}

/// A subscriber for use before the config is known.
pub fn bootstrap_subscriber(cli_level: Option<&str>) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(cli_level, LogLevel::default()))
        .finish()
}

/// Install the global subscriber.
pub fn init(cli_level: Option<&str>, config_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(cli_level, config_level))
        .init();
}
