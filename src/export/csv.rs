//! CSV export.
//!
//! Every field is quoted, so spreadsheet imports never misparse titles
//! containing commas or quotes.

use std::io::Write;

use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};

use crate::export::row;
use crate::export::ExportOptions;
use crate::registry::Area;

/// Writes the areas as CSV.
///
/// # Returns
///
/// The number of data rows written (excluding the header).
pub fn write_csv<W: Write>(
    areas: &[&Area],
    options: &ExportOptions,
    writer: W,
) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(row::headers(options))?;
    for area in areas {
        csv_writer.write_record(row::values(area, options))?;
    }
    csv_writer.flush()?;
    Ok(areas.len())
}
