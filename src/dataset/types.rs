//! Dataset document model.
//!
//! The offline analytics pipeline publishes one JSON document containing
//! dataset-level metadata plus the full area list with nullable analytics.
//! This module deserializes and structurally validates that document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::normalize_domain;
use crate::error_handling::LoadError;
use crate::overlay::Rect;
use crate::registry::{DomainAnalytics, RawArea};

/// Top-level dataset document: `{ metadata, areas }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDocument {
    /// Dataset-level metadata and probe summary.
    pub metadata: DatasetMetadata,
    /// Every area in dataset order.
    pub areas: Vec<AreaRecord>,
}

/// Dataset-level metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Declared number of areas.
    pub total_areas: usize,
    /// Declared number of areas with analytics attached.
    #[serde(default)]
    pub areas_with_analytics: usize,
    /// Declared number of areas without analytics.
    #[serde(default)]
    pub areas_without_analytics: usize,
    /// Declared analytics match rate, 0.0 to 1.0.
    #[serde(default)]
    pub match_rate: f64,
    /// Declared coordinate extent of the dataset.
    #[serde(default)]
    pub coordinate_range: Option<CoordinateRange>,
    /// Provenance of the analytics run.
    #[serde(default)]
    pub analytics_metadata: Option<AnalyticsMetadata>,
}

/// Bounding extent of all area coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRange {
    /// Smallest x across areas.
    pub min_x: f64,
    /// Largest x across areas.
    pub max_x: f64,
    /// Smallest y across areas.
    pub min_y: f64,
    /// Largest y across areas.
    pub max_y: f64,
}

/// Provenance and summary counts from the analytics run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsMetadata {
    /// When the analytics run completed (ISO-8601, opaque here).
    #[serde(default)]
    pub generated_at: Option<String>,
    /// Number of distinct domains probed.
    #[serde(default)]
    pub total_domains: Option<usize>,
    /// Status distribution summaries.
    #[serde(default)]
    pub summary: Option<AnalyticsSummary>,
}

/// Count-by-status summaries from the analytics run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Count per DNS status.
    #[serde(default)]
    pub dns_status: HashMap<String, usize>,
    /// Count per HTTP status.
    #[serde(default)]
    pub http_status: HashMap<String, usize>,
    /// Count per WHOIS status.
    #[serde(default)]
    pub whois_status: HashMap<String, usize>,
}

/// One area record as it appears in the JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaRecord {
    /// Domain reference, possibly a full URL.
    pub domain: String,
    /// Free-text label.
    #[serde(default)]
    pub title: String,
    /// Rectangle in canvas pixels; the fallback geometry when no map
    /// fragment is supplied.
    #[serde(default)]
    pub coordinates: Option<RawCoordinates>,
    /// Probe result, null for unmatched domains.
    #[serde(default)]
    pub analytics: Option<DomainAnalytics>,
}

/// Raw rectangle as serialized in the document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawCoordinates {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl From<RawCoordinates> for Rect {
    fn from(raw: RawCoordinates) -> Self {
        Rect::new(raw.x, raw.y, raw.width, raw.height)
    }
}

/// Structurally validates a parsed document.
///
/// # Errors
///
/// Returns [`LoadError::Validation`] when the `areas` array is empty or
/// `metadata.totalAreas` is zero. These are terminal: retrying cannot fix
/// a malformed publication.
pub fn validate_document(document: &DatasetDocument) -> Result<(), LoadError> {
    if document.areas.is_empty() {
        return Err(LoadError::Validation("areas array is empty".to_string()));
    }
    if document.metadata.total_areas == 0 {
        return Err(LoadError::Validation(
            "metadata.totalAreas is zero".to_string(),
        ));
    }
    Ok(())
}

/// Splits a document into registry inputs.
///
/// Analytics embedded per-area are hoisted into a map keyed by normalized
/// domain (first record wins on duplicates); the JSON coordinates are
/// validated against the canvas invariant and dropped (not fatal) when
/// they fail.
pub fn registry_inputs(
    document: &DatasetDocument,
) -> (Vec<RawArea>, HashMap<String, DomainAnalytics>) {
    let mut analytics_by_domain: HashMap<String, DomainAnalytics> = HashMap::new();
    let mut raw_areas = Vec::with_capacity(document.areas.len());

    for record in &document.areas {
        let normalized = normalize_domain(&record.domain);
        if let Some(analytics) = &record.analytics {
            if !normalized.is_empty() {
                analytics_by_domain
                    .entry(normalized)
                    .or_insert_with(|| analytics.clone());
            }
        }

        let coordinates = record.coordinates.map(Rect::from).filter(|rect| {
            let valid = rect.is_valid();
            if !valid {
                log::debug!(
                    "area {:?}: dropping invalid rectangle {:?}",
                    record.domain,
                    rect
                );
            }
            valid
        });

        raw_areas.push(RawArea {
            domain: record.domain.clone(),
            title: record.title.clone(),
            coordinates,
        });
    }

    (raw_areas, analytics_by_domain)
}
