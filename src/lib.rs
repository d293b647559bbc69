//! pixel_status library: the engine behind the pixel-map domain dashboard
//!
//! This library implements the full analytics engine the dashboard runs
//! on: dataset loading with retry/backoff, the area registry, fuzzy
//! search with structured filters, the query coordinator, the spatial
//! overlay model (render plan, hit-testing, scroll centering), tooltip
//! placement, and result export. Rendering itself is a collaborator's
//! job: the overlay emits plain data (region descriptors plus transition
//! parameters), never draws.
//!
//! # Example
//!
//! ```no_run
//! use pixel_status::{load_snapshot, Config, DatasetSource};
//! use pixel_status::search::{QueryAction, QueryCoordinator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     dataset: DatasetSource::from_arg("https://example.com/dataset.json"),
//!     ..Default::default()
//! };
//!
//! let report = load_snapshot(&config).await?;
//! let mut coordinator = QueryCoordinator::new();
//! coordinator.dispatch(QueryAction::SetQuery("pixel".into()), &report.snapshot);
//! println!("{} match(es)", coordinator.state().results.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod overlay;
pub mod registry;
pub mod search;
pub mod tooltip;

// Re-export public API
pub use config::{Config, DatasetSource, LogFormat, LogLevel};
pub use domain::normalize_domain;
pub use run::{load_snapshot, LoadReport};

// Internal run module (dataset-to-snapshot orchestration)
mod run {
    use anyhow::{Context, Result};

    use crate::config::{Config, DatasetSource};
    use crate::dataset::{build_registry, fetch_dataset, read_dataset_file};
    use crate::initialization::init_client;
    use crate::search::Snapshot;

    /// Result of loading the dataset into a searchable snapshot.
    pub struct LoadReport {
        /// The registry plus index, ready for the coordinator.
        pub snapshot: Snapshot,
        /// Retries the fetch needed before succeeding (0 for local files).
        pub retry_count: u32,
    }

    /// Loads the dataset and builds a searchable snapshot.
    ///
    /// Fetches (with timeout, retry, and backoff) or reads the dataset
    /// document, optionally reads the map HTML fragment for authoritative
    /// geometry, builds the registry, and indexes it.
    ///
    /// # Errors
    ///
    /// Returns an error when the dataset cannot be loaded or fails
    /// structural validation, or when a configured map fragment file
    /// cannot be read. Per-area geometry problems are not errors; those
    /// areas just stay out of the render plan.
    pub async fn load_snapshot(config: &Config) -> Result<LoadReport> {
        let (document, retry_count) = match &config.dataset {
            DatasetSource::Url(url) => {
                let client = init_client(config.fetch_timeout)
                    .context("Failed to initialize HTTP client")?;
                let outcome = fetch_dataset(&client, url).await?;
                (outcome.document, outcome.retry_count)
            }
            DatasetSource::File(path) => (read_dataset_file(path)?, 0),
        };

        let map_fragment = match &config.map_html {
            Some(path) => Some(std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read map fragment: {}", path.display())
            })?),
            None => None,
        };

        let registry = build_registry(&document, map_fragment.as_deref());
        let snapshot = Snapshot::with_tuning(registry, config.tuning.clone());
        Ok(LoadReport {
            snapshot,
            retry_count,
        })
    }
}
