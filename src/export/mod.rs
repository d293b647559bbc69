//! Export functionality.
//!
//! This module serializes the current effective result set into CSV, JSON,
//! or plain text. Its input contract is the coordinator's
//! [`effective_results`](crate::search::QueryCoordinator::effective_results):
//! exactly the active results, or the full registry when "only filtered"
//! is off.

mod csv;
mod json;
mod row;
mod txt;
mod types;

use std::io::{self, Write};

use anyhow::{Context, Result};

pub use types::{ExportFormat, ExportOptions};

use crate::registry::Area;

/// Exports areas to the configured destination.
///
/// # Arguments
///
/// * `areas` - The effective result set, in presentation order
/// * `options` - Format, column, and destination options
///
/// # Returns
///
/// The number of records exported, or an error if the destination cannot
/// be written.
pub fn export_areas(areas: &[&Area], options: &ExportOptions) -> Result<usize> {
    // Trait object so file and stdout take the same path
    let writer: Box<dyn Write> = if let Some(output_path) = &options.output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(file)
    } else {
        Box::new(io::stdout())
    };

    let count = match options.format {
        ExportFormat::Csv => csv::write_csv(areas, options, writer)?,
        ExportFormat::Json => json::write_json(areas, options, writer)?,
        ExportFormat::Txt => txt::write_txt(areas, options, writer)?,
    };
    log::info!("Exported {count} record(s) as {}", options.format);
    Ok(count)
}

// Re-exported for integration tests that render into buffers directly.
pub use csv::write_csv;
pub use json::write_json;
pub use txt::write_txt;
