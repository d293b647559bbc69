//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error_handling::InitializationError;

/// Builds the shared HTTP client for dataset fetches.
///
/// The timeout covers the whole request including body download; hitting
/// it surfaces as a `Timeout` load error and participates in retry.
///
/// # Arguments
///
/// * `timeout` - Total per-request deadline
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// constructed.
pub fn init_client(timeout: Duration) -> Result<Arc<Client>, InitializationError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pixel_status/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(Arc::new(client))
}
