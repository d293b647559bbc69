//! Search: the fuzzy index, the filter engine, the query coordinator, and
//! the interactive scheduling policies.

mod coordinator;
mod filters;
mod index;
mod schedule;

use std::sync::{Arc, RwLock};

pub use coordinator::{recompute, QueryAction, QueryCoordinator, QueryState};
pub use filters::{DateRange, LengthRange, SearchFilters};
pub use index::{SearchIndex, SearchTuning};
pub use schedule::{FrameGate, LatestWins};

use crate::registry::AreaRegistry;

/// One consistent generation of searchable state: a registry and the index
/// built over it.
///
/// Registry and index always travel together. A reload builds a fresh
/// snapshot and swaps the whole thing, so no consumer can pair an old
/// registry with a new index within one recomputation.
pub struct Snapshot {
    /// The area registry for this generation.
    pub registry: AreaRegistry,
    /// The fuzzy index built over that registry.
    pub index: SearchIndex,
}

impl Snapshot {
    /// Builds a snapshot with default search tuning.
    pub fn build(registry: AreaRegistry) -> Self {
        let index = SearchIndex::build(&registry);
        Self { registry, index }
    }

    /// Builds a snapshot with explicit search tuning.
    pub fn with_tuning(registry: AreaRegistry, tuning: SearchTuning) -> Self {
        let index = SearchIndex::with_tuning(&registry, tuning);
        Self { registry, index }
    }
}

/// Shared handle to the current snapshot.
///
/// Readers clone the inner `Arc` and keep using their generation for the
/// duration of a render pass; `replace` swaps the pointer atomically for
/// subsequent readers.
pub struct SharedSnapshot {
    inner: RwLock<Arc<Snapshot>>,
}

impl SharedSnapshot {
    /// Wraps an initial snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The current generation. The returned `Arc` stays valid across a
    /// concurrent `replace`; it just becomes the previous generation.
    pub fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.inner.read().expect("snapshot lock poisoned"))
    }

    /// Atomically installs a new generation.
    pub fn replace(&self, snapshot: Snapshot) {
        *self.inner.write().expect("snapshot lock poisoned") = Arc::new(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RawArea;
    use std::collections::HashMap;

    fn registry_of(domains: &[&str]) -> AreaRegistry {
        let raw = domains
            .iter()
            .map(|d| RawArea {
                domain: (*d).to_string(),
                title: String::new(),
                coordinates: None,
            })
            .collect();
        AreaRegistry::build(raw, HashMap::new())
    }

    #[test]
    fn test_snapshot_pairs_registry_and_index() {
        let snapshot = Snapshot::build(registry_of(&["a.com", "b.com"]));
        assert_eq!(snapshot.registry.len(), 2);
        assert_eq!(snapshot.index.search("a.com", 10), vec![0]);
    }

    #[test]
    fn test_shared_snapshot_swap_is_generational() {
        let shared = SharedSnapshot::new(Snapshot::build(registry_of(&["old.com"])));
        let held = shared.load();

        shared.replace(Snapshot::build(registry_of(&["new.com", "newer.com"])));

        // The held generation is unchanged; fresh loads see the new one
        assert_eq!(held.registry.len(), 1);
        assert_eq!(shared.load().registry.len(), 2);
    }
}
