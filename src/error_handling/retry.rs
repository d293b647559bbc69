//! Retriability classification and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_BASE, RETRY_FACTOR, RETRY_MAX_ATTEMPTS};
use crate::error_handling::LoadError;

/// Returns the retry strategy for dataset fetches.
///
/// Exponential backoff: 2s, 4s, 8s, limited to [`RETRY_MAX_ATTEMPTS`]
/// retries after the initial attempt.
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::RetryIf`.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BASE)
        .factor(RETRY_FACTOR)
        .take(RETRY_MAX_ATTEMPTS)
}

/// Determines whether a [`LoadError`] should be retried.
///
/// Only transient failures (network, timeout) are retried. Parse and
/// validation failures are permanent: the same malformed document would
/// come back on every attempt, so they surface immediately.
pub fn is_retriable_error(error: &LoadError) -> bool {
    matches!(error, LoadError::Network(_) | LoadError::Timeout(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_strategy_schedule() {
        let delays: Vec<Duration> = get_retry_strategy().collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
    }

    #[test]
    fn test_retry_strategy_is_bounded() {
        assert_eq!(get_retry_strategy().count(), RETRY_MAX_ATTEMPTS);
    }

    #[test]
    fn test_timeout_is_retriable() {
        let err = LoadError::Timeout(Duration::from_secs(30));
        assert!(is_retriable_error(&err));
    }

    #[test]
    fn test_parse_is_not_retriable() {
        let err = LoadError::Parse("expected value at line 1".into());
        assert!(!is_retriable_error(&err));
    }

    #[test]
    fn test_validation_is_not_retriable() {
        let err = LoadError::Validation("areas array is empty".into());
        assert!(!is_retriable_error(&err));
    }

    #[test]
    fn test_io_is_not_retriable() {
        // A missing local file will not appear on retry
        let err = LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(!is_retriable_error(&err));
    }
}
