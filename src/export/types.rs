//! Export types and options.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with every field quoted (Excel/Sheets friendly)
    Csv,
    /// JSON with a `{metadata, data}` envelope for programmatic access
    Json,
    /// Human-readable plain-text listing
    Txt,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        };
        f.write_str(name)
    }
}

/// Options for exporting the current result set.
#[derive(Clone, Debug, Serialize)]
pub struct ExportOptions {
    /// Export format.
    pub format: ExportFormat,
    /// Include analytics columns (statuses, nameservers).
    pub include_analytics: bool,
    /// Include rectangle columns.
    pub include_coordinates: bool,
    /// Include probe timestamp columns.
    pub include_timestamps: bool,
    /// Export only the current filtered results; otherwise the whole
    /// registry.
    pub only_filtered: bool,
    /// Output file path (or stdout if None).
    #[serde(skip)]
    pub output: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_analytics: true,
            include_coordinates: false,
            include_timestamps: false,
            only_filtered: true,
            output: None,
        }
    }
}
