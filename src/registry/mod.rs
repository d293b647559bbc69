//! The area registry: the in-memory collection every other component
//! reads from.
//!
//! Built once per dataset load from raw area records plus an analytics map,
//! then immutable. A reload builds a fresh registry and swaps the shared
//! snapshot wholesale, so readers never observe a mixed old/new state.

mod types;

use std::collections::HashMap;

use log::debug;

pub use types::{Area, DnsStatus, DomainAnalytics, RawArea, WhoisStatus};

use crate::domain::normalize_domain;

/// Insertion-ordered collection of areas with O(1) id and domain lookup.
#[derive(Debug, Default)]
pub struct AreaRegistry {
    areas: Vec<Area>,
    by_id: HashMap<u32, usize>,
    by_domain: HashMap<String, usize>,
}

impl AreaRegistry {
    /// Builds a registry from raw records and per-domain analytics.
    ///
    /// For each raw area the domain is normalized, analytics are looked up
    /// by the normalized (lowercase) domain and attached when present, and
    /// a sequential id is assigned in insertion order. Duplicate domains
    /// keep independent areas; domain lookup returns the first one.
    ///
    /// # Arguments
    ///
    /// * `raw_areas` - Area records in dataset order
    /// * `analytics_by_domain` - Probe results keyed by normalized domain
    pub fn build(
        raw_areas: Vec<RawArea>,
        analytics_by_domain: HashMap<String, DomainAnalytics>,
    ) -> Self {
        let mut areas = Vec::with_capacity(raw_areas.len());
        let mut by_id = HashMap::with_capacity(raw_areas.len());
        let mut by_domain: HashMap<String, usize> = HashMap::with_capacity(raw_areas.len());

        for (ordinal, raw) in raw_areas.into_iter().enumerate() {
            let id = ordinal as u32;
            let domain = normalize_domain(&raw.domain);
            if domain.is_empty() && !raw.domain.trim().is_empty() {
                debug!("area {id}: unparsable domain {:?}", raw.domain);
            }

            // Duplicate domains share one analytics record; clone so each
            // area owns its copy exclusively.
            let analytics = analytics_by_domain.get(&domain).cloned();

            let area = Area {
                id,
                domain: domain.clone(),
                title: raw.title,
                coordinates: raw.coordinates,
                analytics,
            };

            by_id.insert(id, ordinal);
            if !domain.is_empty() {
                by_domain.entry(domain).or_insert(ordinal);
            }
            areas.push(area);
        }

        Self {
            areas,
            by_id,
            by_domain,
        }
    }

    /// All areas in insertion order.
    pub fn all(&self) -> &[Area] {
        &self.areas
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Looks an area up by id.
    pub fn by_id(&self, id: u32) -> Option<&Area> {
        self.by_id.get(&id).map(|&idx| &self.areas[idx])
    }

    /// Looks an area up by domain. The key is normalized before lookup,
    /// so `"WWW.Example.com"` and `"example.com"` resolve identically.
    /// When duplicates exist, the first area in insertion order wins.
    pub fn by_domain(&self, domain: &str) -> Option<&Area> {
        let key = normalize_domain(domain);
        self.by_domain.get(&key).map(|&idx| &self.areas[idx])
    }

    /// Areas that carry valid geometry, in insertion order.
    pub fn renderable(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter().filter(|area| area.coordinates.is_some())
    }
}
