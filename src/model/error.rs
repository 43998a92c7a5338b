//! Error types for the presence-dot binary.
//!
//! The widget itself is total and never fails. Errors only arise at the edges:
//! reading configuration, setting up logging and driving the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`PreviewError`] - Terminal setup or IO failed
//!   - [`StatusParseError`] - Unrecognized status name

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::StatusParseError;
use crate::preview::PreviewError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal preview failed.
    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    /// A status name given on the command line was not recognized.
    #[error("{0}")]
    Status(#[from] StatusParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_error_converts_with_context() {
        let err: AppError = ConfigError::ParseError {
            path: PathBuf::from("/tmp/config.toml"),
            reason: "expected `=`".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error:"), "got: {msg}");
        assert!(msg.contains("/tmp/config.toml"), "got: {msg}");
    }

    #[test]
    fn status_error_message_is_passed_through() {
        let err: AppError = StatusParseError("lunch".to_string()).into();
        assert!(err.to_string().starts_with("Unknown presence status"));
    }

    #[test]
    fn preview_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: AppError = PreviewError::from(io).into();
        assert!(err.to_string().contains("tty gone"));
    }
}
