//! Dataset fetching with selective retry logic.
//!
//! Only network-related errors (connection failures, timeouts) are
//! retried, with exponential backoff. Malformed documents are terminal
//! immediately: retrying cannot un-corrupt a published dataset.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use reqwest::Client;

use crate::config::FETCH_TIMEOUT;
use crate::dataset::types::{validate_document, DatasetDocument};
use crate::error_handling::{get_retry_strategy, is_retriable_error, LoadError};

/// Result of a dataset fetch, including the observed retry count.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The parsed, validated document.
    pub document: DatasetDocument,
    /// Retries that preceded success (not counting the initial attempt).
    pub retry_count: u32,
}

/// Parses and validates a dataset document from raw JSON text.
///
/// # Errors
///
/// [`LoadError::Parse`] for JSON syntax or shape mismatches,
/// [`LoadError::Validation`] for structurally unusable documents.
pub fn parse_document(body: &str) -> Result<DatasetDocument, LoadError> {
    let document: DatasetDocument =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    validate_document(&document)?;
    Ok(document)
}

fn classify_reqwest_error(error: reqwest::Error) -> LoadError {
    if error.is_timeout() {
        LoadError::Timeout(FETCH_TIMEOUT)
    } else {
        LoadError::Network(error)
    }
}

async fn fetch_once(client: &Client, url: &str) -> Result<DatasetDocument, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(classify_reqwest_error)?
        .error_for_status()
        .map_err(classify_reqwest_error)?;
    let body = response.text().await.map_err(classify_reqwest_error)?;
    parse_document(&body)
}

/// Fetches the dataset document with retry and backoff.
///
/// Network and timeout failures retry up to the configured attempt limit
/// with exponential backoff; parse and validation failures abort
/// immediately. On success the number of retries that were needed is
/// reported so callers can surface degraded-connectivity conditions.
///
/// # Arguments
///
/// * `client` - Shared HTTP client, already configured with the fetch
///   timeout
/// * `url` - Dataset document URL
///
/// # Errors
///
/// The final [`LoadError`] once retries are exhausted, or the first
/// non-retriable error.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<FetchOutcome, LoadError> {
    log::debug!("Fetching dataset from {url}");

    // Incremented once per attempt, including the initial one
    let attempt_count = Arc::new(AtomicU32::new(0));

    let result = tokio_retry::RetryIf::spawn(
        get_retry_strategy(),
        {
            let attempt_count = Arc::clone(&attempt_count);
            move || {
                attempt_count.fetch_add(1, Ordering::SeqCst);
                let attempt_count = Arc::clone(&attempt_count);
                async move {
                    let outcome = fetch_once(client, url).await;
                    if let Err(e) = &outcome {
                        log::warn!(
                            "Dataset fetch attempt {} failed: {e}",
                            attempt_count.load(Ordering::SeqCst)
                        );
                    }
                    outcome
                }
            }
        },
        is_retriable_error,
    )
    .await;

    let retry_count = attempt_count.load(Ordering::SeqCst).saturating_sub(1);
    match result {
        Ok(document) => {
            log::info!(
                "Dataset loaded: {} areas ({retry_count} retries)",
                document.areas.len()
            );
            Ok(FetchOutcome {
                document,
                retry_count,
            })
        }
        Err(e) => {
            log::error!("Dataset fetch failed after {retry_count} retries: {e}");
            Err(e)
        }
    }
}

/// Reads and parses the dataset document from a local file.
///
/// No retry semantics: the filesystem either has the document or it does
/// not.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, otherwise the same
/// parse/validation errors as the HTTP path.
pub fn read_dataset_file(path: &Path) -> Result<DatasetDocument, LoadError> {
    let body = std::fs::read_to_string(path)?;
    parse_document(&body)
}
