//! Error types for the selfcert application.
//!
//! This module defines the error taxonomy using `thiserror`. Domain errors compose into
//! [`AppError`] via `From`, so the binary can propagate everything with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`FetchError`] - Record fetch failures (missing file, IO, malformed payload, service)
//!   - [`ExportError`] - CSV export failures (nothing to export, artifact delivery)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file loading failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing initialization failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # Recovery Strategy
//!
//! No failure is fatal to a running table view. A fetch failure clears the derived
//! table state and records the reason for display. Validation failures (empty export,
//! incomplete form) surface as warning notifications and leave state untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to fetch the record set.
    ///
    /// At startup this ends the program; inside the terminal view it is shown in the
    /// status line and the table is emptied.
    #[error("Failed to fetch records: {0}")]
    Fetch(#[from] FetchError),

    /// Failed to export records.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors produced by the fetch collaborator.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use selfcert::model::error::FetchError;
///
/// let err = FetchError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.json"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.json"));
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The records file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the records file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a valid record list.
    #[error("Malformed record payload: {0}")]
    Parse(#[from] ParseError),

    /// The backend service reported a failure.
    #[error("Service error: {0}")]
    Service(String),
}

/// Errors encountered when parsing a record payload.
///
/// Individual records without a usable `Id` are not errors: they are skipped and
/// logged. Only a payload that cannot be read as a list at all fails the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The payload is not syntactically valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use selfcert::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     message: "expected value at line 1 column 1".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 1 column 1"));
    /// ```
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// Message from `serde_json`.
        message: String,
    },

    /// The top-level JSON value is not an array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// Errors produced by the export action.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Neither a selection nor (when allowed) a visible page is available.
    ///
    /// This is a validation failure: callers surface it as a warning notification.
    #[error("No records selected.")]
    NothingToExport,

    /// The artifact sink failed to deliver the file.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_converts_into_app_error() {
        fn fetch() -> Result<(), FetchError> {
            Err(FetchError::Service("timeout".to_string()))
        }
        fn run() -> Result<(), AppError> {
            fetch()?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert!(matches!(err, AppError::Fetch(FetchError::Service(_))));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn parse_error_converts_into_fetch_error() {
        let err: FetchError = ParseError::NotAnArray { found: "object" }.into();
        assert!(err.to_string().contains("found object"));
    }

    #[test]
    fn nothing_to_export_message_is_user_facing() {
        assert_eq!(ExportError::NothingToExport.to_string(), "No records selected.");
    }

    #[test]
    fn export_io_error_names_the_path() {
        let err = ExportError::Io {
            path: PathBuf::from("/tmp/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out.csv"));
    }
}
