//! Human-readable plain-text export.

use std::io::Write;

use anyhow::Result;

use crate::config::UNAVAILABLE;
use crate::export::ExportOptions;
use crate::registry::Area;

/// Writes the areas as a readable listing.
///
/// # Returns
///
/// The number of records written.
pub fn write_txt<W: Write>(
    areas: &[&Area],
    options: &ExportOptions,
    mut writer: W,
) -> Result<usize> {
    writeln!(writer, "pixel_status export - {} record(s)", areas.len())?;
    writeln!(writer)?;

    for area in areas {
        let title = if area.title.is_empty() {
            "(untitled)".to_string()
        } else {
            format!("{:?}", area.title)
        };
        writeln!(writer, "[{}] {} - {}", area.id, area.domain, title)?;

        if options.include_coordinates {
            match &area.coordinates {
                Some(rect) => writeln!(
                    writer,
                    "    rect: ({}, {}) {}x{}",
                    rect.x, rect.y, rect.width, rect.height
                )?,
                None => writeln!(writer, "    rect: none")?,
            }
        }

        if options.include_analytics {
            match &area.analytics {
                Some(analytics) => {
                    writeln!(
                        writer,
                        "    dns {}  http {}  whois {}",
                        analytics.dns_status, analytics.http_status, analytics.whois_status
                    )?;
                    if options.include_timestamps {
                        let date = |value: Option<chrono::NaiveDate>| {
                            value
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| UNAVAILABLE.to_string())
                        };
                        writeln!(
                            writer,
                            "    registered {}  expires {}  analyzed {}",
                            date(analytics.registered_at),
                            date(analytics.expiry_date),
                            date(analytics.analyzed_at)
                        )?;
                    }
                    if !analytics.nameservers.is_empty() {
                        writeln!(writer, "    ns: {}", analytics.nameservers.join(", "))?;
                    }
                }
                None => writeln!(writer, "    no analytics")?,
            }
        }
    }

    writer.flush()?;
    Ok(areas.len())
}
