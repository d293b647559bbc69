//! The query coordinator: the state machine tying search and filters
//! together.
//!
//! State is purely data. `(query, filters)` map to
//! `(results, highlighted_domains)` through a pure, idempotent function;
//! nothing is cached between recomputations, so identical inputs always
//! yield structurally identical outputs. `selected_domain` is independent
//! interaction state, not derived from the query.

use std::collections::HashSet;

use crate::registry::Area;
use crate::search::filters::SearchFilters;
use crate::search::Snapshot;

/// The coordinator's current state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Raw query text as entered.
    pub query: String,
    /// Active structured filters.
    pub filters: SearchFilters,
    /// Area ids of the current result list, in presentation order.
    pub results: Vec<u32>,
    /// Distinct domains present in `results`. Always derived, never stale.
    pub highlighted_domains: HashSet<String>,
    /// Domain the user last clicked, if any.
    pub selected_domain: Option<String>,
}

/// A state transition. One reducer function per action, no other way to
/// mutate coordinator state.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    /// Replace the query text and recompute.
    SetQuery(String),
    /// Replace the filter set and recompute.
    SetFilters(SearchFilters),
    /// Mark a domain as selected (area click).
    SelectDomain(String),
    /// Clear the selection (background click).
    ClearSelection,
}

/// Owns the query state and applies actions against a snapshot.
///
/// The coordinator holds no reference to the snapshot itself; callers pass
/// the snapshot current at dispatch time, so a reload (snapshot swap) is
/// picked up atomically on the next action.
#[derive(Debug, Default)]
pub struct QueryCoordinator {
    state: QueryState,
}

impl QueryCoordinator {
    /// Creates a coordinator with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Applies an action, recomputing derived state as needed.
    pub fn dispatch(&mut self, action: QueryAction, snapshot: &Snapshot) {
        match action {
            QueryAction::SetQuery(query) => {
                self.state.query = query;
                self.refresh(snapshot);
            }
            QueryAction::SetFilters(filters) => {
                self.state.filters = filters;
                self.refresh(snapshot);
            }
            QueryAction::SelectDomain(domain) => {
                self.state.selected_domain = Some(domain);
            }
            QueryAction::ClearSelection => {
                self.state.selected_domain = None;
            }
        }
    }

    /// Recomputes derived state from the committed inputs.
    ///
    /// Also the hook for reload: after a snapshot swap, calling this once
    /// re-derives results against the new registry and index.
    pub fn refresh(&mut self, snapshot: &Snapshot) {
        let (results, highlighted) =
            recompute(&self.state.query, &self.state.filters, snapshot);
        self.state.results = results;
        self.state.highlighted_domains = highlighted;
    }

    /// The current effective result set, resolved to areas.
    ///
    /// This is the export interface's input contract: with `only_filtered`
    /// the current results, without it the full registry in insertion
    /// order.
    pub fn effective_results<'a>(
        &self,
        snapshot: &'a Snapshot,
        only_filtered: bool,
    ) -> Vec<&'a Area> {
        if only_filtered {
            self.state
                .results
                .iter()
                .filter_map(|&id| snapshot.registry.by_id(id))
                .collect()
        } else {
            snapshot.registry.all().iter().collect()
        }
    }
}

/// Pure recomputation of `(results, highlighted_domains)` from
/// `(query, filters)` against a snapshot.
///
/// Candidate selection has three regimes keyed on the trimmed query
/// length:
///
/// 1. empty: the full registry in insertion order, capped;
/// 2. shorter than the minimum fuzzy length: case-insensitive prefix
///    match on domain OR title, insertion order, capped;
/// 3. otherwise: fuzzy index results in relevance order, capped.
///
/// Active filters are then AND-applied preserving candidate order; the
/// highlight set is the distinct domains of the filtered results. When no
/// filter key is active the candidate set passes through untouched.
pub fn recompute(
    query: &str,
    filters: &SearchFilters,
    snapshot: &Snapshot,
) -> (Vec<u32>, HashSet<String>) {
    let tuning = snapshot.index.tuning();
    let cap = tuning.result_cap;
    let trimmed = query.trim();

    let candidates: Vec<u32> = if trimmed.is_empty() {
        snapshot
            .registry
            .all()
            .iter()
            .take(cap)
            .map(|area| area.id)
            .collect()
    } else if trimmed.chars().count() < tuning.min_match_len {
        let needle = trimmed.to_lowercase();
        snapshot
            .registry
            .all()
            .iter()
            .filter(|area| {
                area.domain.starts_with(&needle)
                    || area.title.to_lowercase().starts_with(&needle)
            })
            .take(cap)
            .map(|area| area.id)
            .collect()
    } else {
        snapshot.index.search(trimmed, cap)
    };

    let results: Vec<u32> = if filters.is_empty() {
        candidates
    } else {
        candidates
            .into_iter()
            .filter(|&id| {
                snapshot
                    .registry
                    .by_id(id)
                    .is_some_and(|area| filters.matches(area))
            })
            .collect()
    };

    let highlighted: HashSet<String> = results
        .iter()
        .filter_map(|&id| snapshot.registry.by_id(id))
        .map(|area| area.domain.clone())
        .collect();

    (results, highlighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AreaRegistry, DnsStatus, DomainAnalytics, RawArea, WhoisStatus};
    use std::collections::HashMap;

    fn snapshot_of(domains: &[(&str, &str)]) -> Snapshot {
        let raw = domains
            .iter()
            .map(|(domain, title)| RawArea {
                domain: (*domain).to_string(),
                title: (*title).to_string(),
                coordinates: None,
            })
            .collect();
        Snapshot::build(AreaRegistry::build(raw, HashMap::new()))
    }

    #[test]
    fn test_empty_query_returns_registry_order() {
        let snapshot = snapshot_of(&[("c.com", ""), ("a.com", ""), ("b.com", "")]);
        let (results, _) = recompute("", &SearchFilters::default(), &snapshot);
        assert_eq!(results, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_char_query_uses_prefix_regime() {
        let snapshot = snapshot_of(&[
            ("apple.com", ""),
            ("banana.com", "apricot stand"),
            ("avocado.net", ""),
            ("cherry.org", ""),
        ]);
        let (results, _) = recompute("a", &SearchFilters::default(), &snapshot);
        // Domain OR title prefix, insertion order
        assert_eq!(results, vec![0, 1, 2]);
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let snapshot = snapshot_of(&[("a.com", ""), ("b.com", "")]);
        let (results, _) = recompute("   ", &SearchFilters::default(), &snapshot);
        assert_eq!(results, vec![0, 1]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let snapshot = snapshot_of(&[("pixel.com", "ads"), ("other.net", "pixels")]);
        let filters = SearchFilters::default();
        let first = recompute("pixel", &filters, &snapshot);
        let second = recompute("pixel", &filters, &snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_highlight_set_matches_results() {
        let snapshot = snapshot_of(&[("dup.com", ""), ("dup.com", ""), ("solo.org", "")]);
        let (results, highlighted) = recompute("", &SearchFilters::default(), &snapshot);
        let expected: HashSet<String> = results
            .iter()
            .map(|&id| snapshot.registry.by_id(id).unwrap().domain.clone())
            .collect();
        assert_eq!(highlighted, expected);
        // Two areas share one domain: three results, two highlighted domains
        assert_eq!(results.len(), 3);
        assert_eq!(highlighted.len(), 2);
    }

    #[test]
    fn test_filters_never_grow_results() {
        // Give a.com analytics so one filter can distinguish it
        let analytics = DomainAnalytics {
            dns_status: DnsStatus::NoError,
            http_status: 200,
            whois_status: WhoisStatus::Registered,
            registered_at: None,
            expiry_date: None,
            analyzed_at: None,
            last_updated: None,
            nameservers: vec![],
        };
        let mut by_domain = HashMap::new();
        by_domain.insert("a.com".to_string(), analytics);
        let raw = ["a.com", "b.com", "c.org"]
            .iter()
            .map(|d| RawArea {
                domain: (*d).to_string(),
                title: String::new(),
                coordinates: None,
            })
            .collect();
        let snapshot = Snapshot::build(AreaRegistry::build(raw, by_domain));

        let unfiltered = recompute("", &SearchFilters::default(), &snapshot).0;
        let filtered = recompute(
            "",
            &SearchFilters {
                has_analytics: Some(true),
                ..Default::default()
            },
            &snapshot,
        )
        .0;
        assert!(filtered.len() <= unfiltered.len());
        assert_eq!(filtered, vec![0]);
    }

    #[test]
    fn test_dispatch_set_query_updates_derived_state() {
        let snapshot = snapshot_of(&[("pixel.com", ""), ("other.net", "")]);
        let mut coordinator = QueryCoordinator::new();
        coordinator.dispatch(QueryAction::SetQuery("pixel".to_string()), &snapshot);
        assert_eq!(coordinator.state().results, vec![0]);
        assert!(coordinator
            .state()
            .highlighted_domains
            .contains("pixel.com"));
    }

    #[test]
    fn test_selection_is_independent_of_query() {
        let snapshot = snapshot_of(&[("pixel.com", ""), ("other.net", "")]);
        let mut coordinator = QueryCoordinator::new();
        coordinator.dispatch(
            QueryAction::SelectDomain("other.net".to_string()),
            &snapshot,
        );
        coordinator.dispatch(QueryAction::SetQuery("pixel".to_string()), &snapshot);
        // Querying does not disturb the selection
        assert_eq!(
            coordinator.state().selected_domain.as_deref(),
            Some("other.net")
        );
        coordinator.dispatch(QueryAction::ClearSelection, &snapshot);
        assert!(coordinator.state().selected_domain.is_none());
    }

    #[test]
    fn test_effective_results_contract() {
        let snapshot = snapshot_of(&[("pixel.com", ""), ("other.net", "")]);
        let mut coordinator = QueryCoordinator::new();
        coordinator.dispatch(QueryAction::SetQuery("pixel".to_string()), &snapshot);

        let filtered = coordinator.effective_results(&snapshot, true);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].domain, "pixel.com");

        let everything = coordinator.effective_results(&snapshot, false);
        assert_eq!(everything.len(), 2);
    }
}
