//! Fuzzy search index over the registry's domain and title fields.
//!
//! Matching is approximate: typos and partial substrings still score, with
//! the domain field weighted above the title. The index is rebuilt whenever
//! the registry is rebuilt and never partially updated.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::config::{DOMAIN_WEIGHT, MIN_MATCH_LEN, RESULT_CAP, TITLE_WEIGHT};
use crate::registry::AreaRegistry;

/// Tunable search parameters.
///
/// The result cap and score cutoff are tuned values carried over from the
/// dashboard, not invariants; deployments may override them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTuning {
    /// Maximum number of results a query may produce.
    pub result_cap: usize,
    /// Minimum query length before fuzzy matching is invoked.
    pub min_match_len: usize,
    /// Relevance weight of the domain field.
    pub domain_weight: f32,
    /// Relevance weight of the title field.
    pub title_weight: f32,
    /// Optional floor on the combined weighted score. Matches scoring
    /// below it are dropped. `None` keeps every fuzzy match.
    pub score_cutoff: Option<f32>,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            result_cap: RESULT_CAP,
            min_match_len: MIN_MATCH_LEN,
            domain_weight: DOMAIN_WEIGHT,
            title_weight: TITLE_WEIGHT,
            score_cutoff: None,
        }
    }
}

struct IndexEntry {
    area_id: u32,
    domain: String,
    title: String,
}

/// Ranked approximate-match index over `(domain, title)` pairs.
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
    tuning: SearchTuning,
}

impl SearchIndex {
    /// Builds an index over the registry with default tuning.
    pub fn build(registry: &AreaRegistry) -> Self {
        Self::with_tuning(registry, SearchTuning::default())
    }

    /// Builds an index over the registry with explicit tuning.
    pub fn with_tuning(registry: &AreaRegistry, tuning: SearchTuning) -> Self {
        let entries = registry
            .all()
            .iter()
            .map(|area| IndexEntry {
                area_id: area.id,
                domain: area.domain.to_lowercase(),
                title: area.title.to_lowercase(),
            })
            .collect();
        Self { entries, tuning }
    }

    /// The tuning this index was built with.
    pub fn tuning(&self) -> &SearchTuning {
        &self.tuning
    }

    /// Ranked fuzzy search.
    ///
    /// # Arguments
    ///
    /// * `query` - The user's search text
    /// * `limit` - Maximum number of area ids to return
    ///
    /// # Returns
    ///
    /// Area ids ordered by relevance descending; ties broken by insertion
    /// order. Queries shorter than the minimum fuzzy length return an
    /// empty vec rather than matching everything -- the prefix regime for
    /// short queries is the coordinator's job, not the index's.
    pub fn search(&self, query: &str, limit: usize) -> Vec<u32> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.tuning.min_match_len {
            return Vec::new();
        }

        let pattern = Pattern::new(
            trimmed,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut utf32buf = Vec::new();

        // (weighted score, insertion ordinal, area id)
        let mut scored: Vec<(f32, usize, u32)> = Vec::new();
        for (ordinal, entry) in self.entries.iter().enumerate() {
            let domain_score = if entry.domain.is_empty() {
                None
            } else {
                let haystack: Utf32Str<'_> = Utf32Str::new(&entry.domain, &mut utf32buf);
                pattern.score(haystack, &mut matcher)
            };
            let title_score = if entry.title.is_empty() {
                None
            } else {
                let haystack: Utf32Str<'_> = Utf32Str::new(&entry.title, &mut utf32buf);
                pattern.score(haystack, &mut matcher)
            };

            if domain_score.is_none() && title_score.is_none() {
                continue;
            }
            let combined = domain_score.unwrap_or(0) as f32 * self.tuning.domain_weight
                + title_score.unwrap_or(0) as f32 * self.tuning.title_weight;
            if let Some(cutoff) = self.tuning.score_cutoff {
                if combined < cutoff {
                    continue;
                }
            }
            scored.push((combined, ordinal, entry.area_id));
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, id)| id)
            .collect()
    }
}
