//! Area and analytics data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

use crate::overlay::Rect;

/// DNS resolution outcome from the offline probe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsStatus {
    /// The domain resolved successfully.
    NoError,
    /// The domain does not exist.
    NxDomain,
    /// The authoritative server failed.
    ServFail,
    /// The query timed out.
    Timeout,
    /// The query was refused.
    Refused,
}

impl DnsStatus {
    /// Wire/display form of the status, matching the dataset's vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsStatus::NoError => "NOERROR",
            DnsStatus::NxDomain => "NXDOMAIN",
            DnsStatus::ServFail => "SERVFAIL",
            DnsStatus::Timeout => "TIMEOUT",
            DnsStatus::Refused => "REFUSED",
        }
    }
}

impl std::fmt::Display for DnsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DnsStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOERROR" => Ok(DnsStatus::NoError),
            "NXDOMAIN" => Ok(DnsStatus::NxDomain),
            "SERVFAIL" => Ok(DnsStatus::ServFail),
            "TIMEOUT" => Ok(DnsStatus::Timeout),
            "REFUSED" => Ok(DnsStatus::Refused),
            other => Err(format!("unknown DNS status: {other}")),
        }
    }
}

/// Domain registration state as of the last offline WHOIS probe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WhoisStatus {
    /// The domain is registered.
    Registered,
    /// The domain is available for registration.
    Available,
    /// The probe could not determine the state.
    Unknown,
    /// The probe itself failed.
    Error,
}

impl WhoisStatus {
    /// Wire/display form of the status, matching the dataset's vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            WhoisStatus::Registered => "registered",
            WhoisStatus::Available => "available",
            WhoisStatus::Unknown => "unknown",
            WhoisStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for WhoisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WhoisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "registered" => Ok(WhoisStatus::Registered),
            "available" => Ok(WhoisStatus::Available),
            "unknown" => Ok(WhoisStatus::Unknown),
            "error" => Ok(WhoisStatus::Error),
            other => Err(format!("unknown WHOIS status: {other}")),
        }
    }
}

/// Pre-computed external probe result for a domain.
///
/// Owned exclusively by its [`Area`]; never shared across areas, immutable
/// for the lifetime of a dataset load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAnalytics {
    /// DNS resolution outcome.
    pub dns_status: DnsStatus,
    /// HTTP status code, or 0 when no response was received.
    #[serde(default)]
    pub http_status: u16,
    /// WHOIS registration state.
    pub whois_status: WhoisStatus,
    /// Registration date, when the probe recovered one.
    #[serde(default)]
    pub registered_at: Option<NaiveDate>,
    /// Expiry date, when the probe recovered one.
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    /// When this domain was analyzed.
    #[serde(default)]
    pub analyzed_at: Option<NaiveDate>,
    /// When this record was last refreshed.
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
    /// Nameservers in probe order, possibly empty.
    #[serde(default)]
    pub nameservers: Vec<String>,
}

impl DomainAnalytics {
    /// Whether the probe found at least one nameserver.
    pub fn has_nameservers(&self) -> bool {
        !self.nameservers.is_empty()
    }
}

/// One purchased rectangular region of the pixel image.
///
/// Constructed once at dataset-load time and immutable thereafter; a full
/// reload discards every `Area` and builds fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    /// Stable identifier, unique within a dataset load, assigned at parse
    /// time in insertion order. Never reused.
    pub id: u32,
    /// Normalized hostname (scheme and leading `www.` stripped). May be
    /// empty when unparsable; not unique, one owner can hold several
    /// rectangles.
    pub domain: String,
    /// Free-text label, possibly empty.
    pub title: String,
    /// Validated canvas rectangle, or `None` when the source geometry was
    /// missing or invalid. Areas without geometry stay searchable and
    /// exportable but are never rendered or hit-tested.
    pub coordinates: Option<Rect>,
    /// Probe result for this domain, when the offline pipeline covered it.
    pub analytics: Option<DomainAnalytics>,
}

impl Area {
    /// Whether analytics are attached.
    pub fn has_analytics(&self) -> bool {
        self.analytics.is_some()
    }
}

/// An un-identified area record on its way into the registry.
///
/// Produced either from the JSON dataset or from the map HTML fragment;
/// the registry assigns ids and attaches analytics during build.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArea {
    /// Raw domain reference, normalized during registry build.
    pub domain: String,
    /// Free-text label.
    pub title: String,
    /// Validated rectangle, `None` when the source geometry was rejected.
    pub coordinates: Option<Rect>,
}
