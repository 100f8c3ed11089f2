//! Status handling for search API responses.
//!
//! Serper answers a bad or exhausted API key with a 4xx and a short text
//! body, and a burst of lesson searches with 429. Either way the lesson
//! degrades to zero results; the status and body only reach the logs.

use crate::error::SearchError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass a 2xx search response through; map anything else to a [`SearchError`].
///
/// 429 becomes [`SearchError::RateLimited`] with the `Retry-After` delay.
/// Other failures become [`SearchError::Api`] carrying the provider's body,
/// e.g. `"Unauthorized."` for a missing key.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SearchError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SearchError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(SearchError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
