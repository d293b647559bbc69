//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use std::time::Duration;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for dataset loading.
///
/// Network and timeout failures are transient and retried with backoff;
/// parse and validation failures are terminal immediately, since retrying a
/// malformed document cannot succeed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The fetch failed at the network layer (connection refused, DNS
    /// failure, offline, non-success HTTP status).
    #[error("network error: {0}")]
    Network(#[source] ReqwestError),

    /// The fetch exceeded its deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body is not valid JSON for the dataset document shape.
    #[error("malformed dataset: {0}")]
    Parse(String),

    /// The document parsed but fails structural validation (missing or
    /// empty `areas`, invalid `metadata.totalAreas`).
    #[error("dataset failed validation: {0}")]
    Validation(String),

    /// The dataset file could not be read from disk.
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`LoadError`], used for the load state
/// machine and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// Fetch failure or offline.
    Network,
    /// Fetch exceeded its deadline.
    Timeout,
    /// Response was not a valid dataset document.
    Parse,
    /// Document parsed but is structurally unusable.
    Validation,
}

impl LoadError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Network(_) | LoadError::Io(_) => LoadErrorKind::Network,
            LoadError::Timeout(_) => LoadErrorKind::Timeout,
            LoadError::Parse(_) => LoadErrorKind::Parse,
            LoadError::Validation(_) => LoadErrorKind::Validation,
        }
    }

    /// Plain-language description of the error kind, for the terminal
    /// error screen.
    pub fn user_message(&self) -> String {
        match self.kind() {
            LoadErrorKind::Network => {
                "Could not reach the dataset server. Check your connection and retry.".to_string()
            }
            LoadErrorKind::Timeout => {
                "The dataset server took too long to respond. Retry in a moment.".to_string()
            }
            LoadErrorKind::Parse => format!("The dataset could not be read: {self}"),
            LoadErrorKind::Validation => format!("The dataset is incomplete: {self}"),
        }
    }
}

/// Error types for quad-coordinate parsing and rectangle validation.
///
/// These are recovered locally: an area with bad geometry is excluded from
/// the renderable overlay but stays in the registry for search and export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The coords attribute did not contain exactly four values.
    #[error("expected four comma-separated coordinates, got {0}")]
    WrongArity(usize),

    /// A coordinate failed to parse as a finite number.
    #[error("coordinate is not a finite number: {0:?}")]
    NotFinite(String),

    /// The rectangle collapses to a line or point.
    #[error("rectangle has zero extent")]
    ZeroExtent,

    /// The rectangle has negative origin or extends past the canvas.
    #[error("rectangle falls outside the canvas")]
    OutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_kinds() {
        assert_eq!(
            LoadError::Timeout(Duration::from_secs(30)).kind(),
            LoadErrorKind::Timeout
        );
        assert_eq!(
            LoadError::Parse("unexpected end of input".into()).kind(),
            LoadErrorKind::Parse
        );
        assert_eq!(
            LoadError::Validation("areas array is empty".into()).kind(),
            LoadErrorKind::Validation
        );
    }

    #[test]
    fn test_user_message_is_plain_language() {
        let err = LoadError::Timeout(Duration::from_secs(30));
        let msg = err.user_message();
        assert!(msg.contains("took too long"), "got: {msg}");

        let err = LoadError::Validation("areas array is empty".into());
        assert!(err.user_message().contains("incomplete"));
    }

    #[test]
    fn test_geometry_error_display() {
        assert_eq!(
            GeometryError::WrongArity(3).to_string(),
            "expected four comma-separated coordinates, got 3"
        );
        assert_eq!(
            GeometryError::ZeroExtent.to_string(),
            "rectangle has zero extent"
        );
    }
}
