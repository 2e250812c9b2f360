//! Diagnostic logging for terminal applications.
//!
//! A full-screen TUI owns stdout, so log output goes to a file. Widgets and
//! the runtime log through `tracing` macros; this module only installs the
//! subscriber.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives (`EnvFilter` syntax).
pub const LOG_ENV: &str = "SOSO_LOG";

/// Errors from installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    /// A global subscriber is already installed.
    #[error("log subscriber already installed: {0}")]
    Init(String),
}

/// Build the filter from [`LOG_ENV`], falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global `tracing` subscriber that appends plain-text records to
/// `path`.
///
/// # Example
///
/// ```no_run
/// soso_core::logging::log_to_file("soso.log").unwrap();
/// tracing::info!("ready");
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| LogError::Init(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = log_to_file("/nonexistent-soso-dir/app.log").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }

    #[test]
    fn filter_defaults_to_info() {
        if std::env::var(LOG_ENV).is_err() {
            assert_eq!(env_filter().to_string(), "info");
        }
    }
}
