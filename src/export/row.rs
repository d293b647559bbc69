//! Shared row flattening for the tabular export formats.

use serde_json::{json, Value};

use crate::config::UNAVAILABLE;
use crate::export::ExportOptions;
use crate::registry::Area;

fn date_or_unavailable(value: Option<chrono::NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Column headers for the active option set, in output order.
pub fn headers(options: &ExportOptions) -> Vec<&'static str> {
    let mut columns = vec!["id", "domain", "title"];
    if options.include_coordinates {
        columns.extend(["x", "y", "width", "height"]);
    }
    if options.include_analytics {
        columns.extend([
            "dns_status",
            "http_status",
            "whois_status",
            "nameservers",
            "nameserver_count",
        ]);
    }
    if options.include_timestamps {
        columns.extend(["registered_at", "expiry_date", "analyzed_at", "last_updated"]);
    }
    columns
}

/// Flattened field values for one area, aligned with [`headers`].
pub fn values(area: &Area, options: &ExportOptions) -> Vec<String> {
    let mut fields = vec![
        area.id.to_string(),
        area.domain.clone(),
        area.title.clone(),
    ];

    if options.include_coordinates {
        match &area.coordinates {
            Some(rect) => fields.extend([
                rect.x.to_string(),
                rect.y.to_string(),
                rect.width.to_string(),
                rect.height.to_string(),
            ]),
            None => fields.extend([String::new(), String::new(), String::new(), String::new()]),
        }
    }

    if options.include_analytics {
        match &area.analytics {
            Some(analytics) => fields.extend([
                analytics.dns_status.to_string(),
                analytics.http_status.to_string(),
                analytics.whois_status.to_string(),
                analytics.nameservers.join(","),
                analytics.nameservers.len().to_string(),
            ]),
            None => fields.extend([
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "0".to_string(),
            ]),
        }
    }

    if options.include_timestamps {
        match &area.analytics {
            Some(analytics) => fields.extend([
                date_or_unavailable(analytics.registered_at),
                date_or_unavailable(analytics.expiry_date),
                date_or_unavailable(analytics.analyzed_at),
                date_or_unavailable(analytics.last_updated),
            ]),
            None => fields.extend([
                UNAVAILABLE.to_string(),
                UNAVAILABLE.to_string(),
                UNAVAILABLE.to_string(),
                UNAVAILABLE.to_string(),
            ]),
        }
    }

    fields
}

/// Nested JSON value for one area, honoring the same option set.
pub fn json_value(area: &Area, options: &ExportOptions) -> Value {
    let mut object = json!({
        "id": area.id,
        "domain": area.domain,
        "title": area.title,
    });
    let map = object.as_object_mut().expect("object literal");

    if options.include_coordinates {
        map.insert(
            "coordinates".to_string(),
            match &area.coordinates {
                Some(rect) => json!({
                    "x": rect.x,
                    "y": rect.y,
                    "width": rect.width,
                    "height": rect.height,
                }),
                None => Value::Null,
            },
        );
    }

    if options.include_analytics {
        map.insert(
            "analytics".to_string(),
            match &area.analytics {
                Some(analytics) => {
                    let mut inner = json!({
                        "dns_status": analytics.dns_status,
                        "http_status": analytics.http_status,
                        "whois_status": analytics.whois_status,
                        "nameservers": analytics.nameservers,
                    });
                    if options.include_timestamps {
                        let inner_map = inner.as_object_mut().expect("object literal");
                        inner_map.insert(
                            "registered_at".to_string(),
                            json!(analytics.registered_at),
                        );
                        inner_map
                            .insert("expiry_date".to_string(), json!(analytics.expiry_date));
                        inner_map
                            .insert("analyzed_at".to_string(), json!(analytics.analyzed_at));
                        inner_map
                            .insert("last_updated".to_string(), json!(analytics.last_updated));
                    }
                    inner
                }
                None => Value::Null,
            },
        );
    }

    object
}
