//! Retry with exponential backoff for transient geocoding errors.
//!
//! Non-retriable errors (parse failures, 404s, unexpected statuses) are
//! propagated immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::GeocodeError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable:
/// - [`GeocodeError::RateLimited`] — HTTP 429; the provider asked us to back off.
/// - [`GeocodeError::Http`] — network-level failure (connection reset, timeout).
///
/// Everything else is propagated immediately; retrying a 404 or a body that
/// does not parse returns the same result.
fn is_retriable(err: &GeocodeError) -> bool {
    matches!(
        err,
        GeocodeError::RateLimited { .. } | GeocodeError::Http(_)
    )
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after the
/// first try. If all retries are exhausted the last error is returned.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, GeocodeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GeocodeError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^attempt seconds, capped against overflow.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient geocoding error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
