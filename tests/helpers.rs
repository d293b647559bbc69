// Shared test helpers for dataset fixtures and snapshot construction.
//
// This module provides common utilities used across multiple test files to
// reduce duplication.

use pixel_status::dataset::{build_registry, parse_document};
use pixel_status::search::Snapshot;

/// The canonical three-area scenario: a registered domain with full
/// analytics, a bare area with no analytics, and an NXDOMAIN area.
#[allow(dead_code)] // Used by other test files
pub const THREE_AREA_DATASET: &str = r#"{
    "metadata": {
        "totalAreas": 3,
        "areasWithAnalytics": 2,
        "areasWithoutAnalytics": 1,
        "matchRate": 0.667
    },
    "areas": [
        {
            "domain": "http://www.a.com",
            "title": "Alpha Adverts",
            "coordinates": {"x": 0, "y": 0, "width": 100, "height": 50},
            "analytics": {
                "dns_status": "NOERROR",
                "http_status": 200,
                "whois_status": "registered",
                "registered_at": "2005-03-01",
                "nameservers": ["ns1.a.com", "ns2.a.com"]
            }
        },
        {
            "domain": "b.com",
            "title": "Bravo Block",
            "coordinates": {"x": 100, "y": 0, "width": 100, "height": 50},
            "analytics": null
        },
        {
            "domain": "c.org",
            "title": "Charlie Corner",
            "coordinates": {"x": 200, "y": 0, "width": 100, "height": 50},
            "analytics": {
                "dns_status": "NXDOMAIN",
                "http_status": 0,
                "whois_status": "available"
            }
        }
    ]
}"#;

/// Builds a snapshot from dataset JSON, with no map fragment.
#[allow(dead_code)] // Used by other test files
pub fn snapshot_from_json(json: &str) -> Snapshot {
    let document = parse_document(json).expect("test dataset should parse");
    Snapshot::build(build_registry(&document, None))
}

/// Builds the canonical three-area snapshot.
#[allow(dead_code)] // Used by other test files
pub fn three_area_snapshot() -> Snapshot {
    snapshot_from_json(THREE_AREA_DATASET)
}
