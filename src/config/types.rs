//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and library configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::FETCH_TIMEOUT;
use crate::search::SearchTuning;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Where the dataset document comes from.
///
/// CLI arguments starting with `http://` or `https://` are treated as URLs;
/// everything else is a local file path.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Fetch the document over HTTP (with timeout, retry, and backoff).
    Url(String),
    /// Read the document from a local file (no retry semantics).
    File(PathBuf),
}

impl DatasetSource {
    /// Parses a CLI argument into a dataset source.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            DatasetSource::Url(arg.to_string())
        } else {
            DatasetSource::File(PathBuf::from(arg))
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library entry points.
/// It can be constructed programmatically without any CLI parsing.
///
/// # Examples
///
/// ```no_run
/// use pixel_status::{Config, DatasetSource};
///
/// let config = Config {
///     dataset: DatasetSource::from_arg("./dataset.json"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset document source (URL or local file).
    pub dataset: DatasetSource,

    /// Optional map HTML fragment carrying the authoritative `<area>`
    /// hit-region geometry. When absent, the JSON document's own
    /// coordinates are used.
    pub map_html: Option<PathBuf>,

    /// Dataset fetch timeout.
    pub fetch_timeout: Duration,

    /// Search engine tuning (result cap, fuzzy weights, cutoff).
    pub tuning: SearchTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::File(PathBuf::from("./dataset.json")),
            map_html: None,
            fetch_timeout: FETCH_TIMEOUT,
            tuning: SearchTuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_dataset_source_from_arg_url() {
        assert!(matches!(
            DatasetSource::from_arg("https://example.com/dataset.json"),
            DatasetSource::Url(_)
        ));
        assert!(matches!(
            DatasetSource::from_arg("http://localhost:8080/data"),
            DatasetSource::Url(_)
        ));
    }

    #[test]
    fn test_dataset_source_from_arg_file() {
        assert!(matches!(
            DatasetSource::from_arg("./dataset.json"),
            DatasetSource::File(_)
        ));
        assert!(matches!(
            DatasetSource::from_arg("/var/data/areas.json"),
            DatasetSource::File(_)
        ));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.fetch_timeout, FETCH_TIMEOUT);
        assert!(config.map_html.is_none());
        assert!(matches!(config.dataset, DatasetSource::File(_)));
    }
}
