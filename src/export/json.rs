//! JSON export with a `{metadata, data}` envelope.

use std::io::Write;

use anyhow::Result;
use serde_json::json;

use crate::export::row;
use crate::export::ExportOptions;
use crate::registry::Area;

/// Writes the areas as JSON.
///
/// The envelope carries the export options and a timestamp alongside the
/// data, so a consumer can tell exactly which view of the dataset it is
/// holding.
///
/// # Returns
///
/// The number of data records written.
pub fn write_json<W: Write>(
    areas: &[&Area],
    options: &ExportOptions,
    mut writer: W,
) -> Result<usize> {
    let data: Vec<serde_json::Value> = areas
        .iter()
        .map(|area| row::json_value(area, options))
        .collect();

    let envelope = json!({
        "metadata": {
            "exported_at": chrono::Utc::now().to_rfc3339(),
            "record_count": data.len(),
            "options": options,
        },
        "data": data,
    });

    serde_json::to_writer_pretty(&mut writer, &envelope)?;
    writer.write_all(b"\n")?;
    Ok(areas.len())
}
