use scraper::{Html, Selector};
use std::sync::LazyLock;

use log::warn;

use crate::overlay::geometry::parse_valid_quad;
use crate::registry::RawArea;

// CSS selector strings
const AREA_SELECTOR_STR: &str = "area[coords]";

static AREA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(AREA_SELECTOR_STR).expect("Failed to parse area selector - this is a bug")
});

/// Parses the map HTML fragment into raw area records.
///
/// The fragment carries one `<area coords="x1,y1,x2,y2" href=".."
/// title="..">` element per region and is the authoritative hit-region
/// geometry; the JSON dataset's own coordinates are only a fallback when
/// this resource is unavailable.
///
/// Elements whose coords fail to parse or violate the canvas invariant
/// are kept without geometry: they stay searchable but are never
/// rendered. This is a data-quality tolerance, not a failure, so nothing
/// is surfaced beyond a log line.
///
/// # Arguments
///
/// * `fragment` - The HTML fragment source
///
/// # Returns
///
/// Raw area records in document order.
pub fn parse_map_fragment(fragment: &str) -> Vec<RawArea> {
    let document = Html::parse_fragment(fragment);
    let mut records = Vec::new();

    for element in document.select(&AREA_SELECTOR) {
        let coords_attr = element.value().attr("coords").unwrap_or_default();
        let domain = element.value().attr("href").unwrap_or_default().to_string();
        let title = element
            .value()
            .attr("title")
            .unwrap_or_default()
            .trim()
            .to_string();

        let coordinates = match parse_valid_quad(coords_attr) {
            Ok(rect) => Some(rect),
            Err(err) => {
                warn!("map area {domain:?}: rejected coords {coords_attr:?}: {err}");
                None
            }
        };

        records.push(RawArea {
            domain,
            title,
            coordinates,
        });
    }

    records
}
