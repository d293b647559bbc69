//! Structured filter predicates applied after text search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::registry::{Area, DnsStatus, WhoisStatus};

/// Inclusive numeric range over the domain's character length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthRange {
    /// Minimum length, inclusive, when set.
    pub min: Option<usize>,
    /// Maximum length, inclusive, when set.
    pub max: Option<usize>,
}

/// Inclusive date range over the registration date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// Earliest date, inclusive, when set.
    pub start: Option<NaiveDate>,
    /// Latest date, inclusive, when set.
    pub end: Option<NaiveDate>,
}

/// A structured predicate set over areas.
///
/// Each field is an independent unary predicate; active predicates combine
/// with logical AND. An absent key means "no constraint on that dimension",
/// which is different from a filter that matches nothing. Unknown keys in
/// the serialized form are ignored on deserialization, but every key
/// defined here is honored.
///
/// A filter keyed on an analytics field treats areas without analytics as
/// non-matching, never as a wildcard match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    /// Exact DNS status match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_status: Option<DnsStatus>,
    /// HTTP status compared as a string against the stringified code, so
    /// form input round-trips losslessly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
    /// Exact WHOIS status match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_status: Option<WhoisStatus>,
    /// Exact match against the derived has-analytics flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_analytics: Option<bool>,
    /// Inclusive bounds on the domain's character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_length: Option<LengthRange>,
    /// Inclusive bounds on the registration date; areas without a
    /// registration date are excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// Whether the area's probe found at least one nameserver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_nameservers: Option<bool>,
}

impl SearchFilters {
    /// Whether no filter key is active.
    ///
    /// The coordinator short-circuits on this to avoid scanning the
    /// candidate set when filtering is a no-op.
    pub fn is_empty(&self) -> bool {
        self.dns_status.is_none()
            && self.http_status.is_none()
            && self.whois_status.is_none()
            && self.has_analytics.is_none()
            && self.domain_length.is_none()
            && self.date_range.is_none()
            && self.has_nameservers.is_none()
    }

    /// Evaluates every active predicate against an area, AND-composed.
    pub fn matches(&self, area: &Area) -> bool {
        if let Some(want) = self.dns_status {
            match &area.analytics {
                Some(analytics) if analytics.dns_status == want => {}
                _ => return false,
            }
        }

        if let Some(want) = &self.http_status {
            match &area.analytics {
                Some(analytics) if analytics.http_status.to_string() == *want => {}
                _ => return false,
            }
        }

        if let Some(want) = self.whois_status {
            match &area.analytics {
                Some(analytics) if analytics.whois_status == want => {}
                _ => return false,
            }
        }

        if let Some(want) = self.has_analytics {
            if area.has_analytics() != want {
                return false;
            }
        }

        if let Some(range) = &self.domain_length {
            let len = area.domain.chars().count();
            if range.min.is_some_and(|min| len < min) {
                return false;
            }
            if range.max.is_some_and(|max| len > max) {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            let Some(registered) = area.analytics.as_ref().and_then(|a| a.registered_at)
            else {
                return false;
            };
            if range.start.is_some_and(|start| registered < start) {
                return false;
            }
            if range.end.is_some_and(|end| registered > end) {
                return false;
            }
        }

        if let Some(want) = self.has_nameservers {
            let has = area
                .analytics
                .as_ref()
                .is_some_and(|a| a.has_nameservers());
            if has != want {
                return false;
            }
        }

        true
    }
}
