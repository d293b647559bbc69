//! Dataset loading: the document model, fetch with retry, and the load
//! state machine.

mod fetch;
mod state;
mod types;

pub use fetch::{fetch_dataset, parse_document, read_dataset_file, FetchOutcome};
pub use state::{LoadState, LoadTracker};
pub use types::{
    registry_inputs, validate_document, AnalyticsMetadata, AnalyticsSummary, AreaRecord,
    CoordinateRange, DatasetDocument, DatasetMetadata, RawCoordinates,
};

use log::{info, warn};

use crate::overlay::parse_map_fragment;
use crate::registry::AreaRegistry;

/// Builds the registry from a document and the optional map fragment.
///
/// When a fragment is supplied and yields regions, it is the
/// authoritative geometry: areas are built from its `<area>` elements and
/// joined to analytics by normalized domain. The JSON document's own
/// coordinates are the fallback otherwise.
pub fn build_registry(document: &DatasetDocument, map_fragment: Option<&str>) -> AreaRegistry {
    let (json_areas, analytics_by_domain) = registry_inputs(document);

    let raw_areas = match map_fragment.map(parse_map_fragment) {
        Some(map_areas) if !map_areas.is_empty() => {
            info!(
                "Using map fragment geometry: {} regions ({} dataset records)",
                map_areas.len(),
                json_areas.len()
            );
            map_areas
        }
        Some(_) => {
            warn!("Map fragment contained no regions; falling back to dataset coordinates");
            json_areas
        }
        None => json_areas,
    };

    let registry = AreaRegistry::build(raw_areas, analytics_by_domain);
    report_metadata_drift(document, &registry);
    registry
}

/// Compares declared metadata totals against the built registry.
///
/// Drift is logged, never fatal: a stale metadata block is a data-quality
/// problem upstream, not a reason to refuse the dataset.
fn report_metadata_drift(document: &DatasetDocument, registry: &AreaRegistry) {
    let declared = document.metadata.total_areas;
    // Only meaningful when geometry came from the document itself
    if declared != registry.len() {
        warn!(
            "metadata.totalAreas declares {declared} areas, registry holds {}",
            registry.len()
        );
    }

    let with_analytics = registry
        .all()
        .iter()
        .filter(|area| area.has_analytics())
        .count();
    let declared_with = document.metadata.areas_with_analytics;
    if declared_with != 0 && declared_with != with_analytics {
        warn!(
            "metadata.areasWithAnalytics declares {declared_with}, registry holds {with_analytics}"
        );
    }

    if !registry.is_empty() {
        let match_rate = with_analytics as f64 / registry.len() as f64;
        info!(
            "Registry built: {} areas, {with_analytics} with analytics ({:.1}% match)",
            registry.len(),
            match_rate * 100.0
        );
    }
}
