//! Search error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when querying a search provider.
///
/// The aggregator never returns these: each one is logged and turned into an
/// empty result for the lesson that hit it.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Response body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Response parsed but carried no organic result list.
    #[error("response has no organic results field")]
    MissingResults,

    /// The request did not finish within the per-lesson deadline.
    #[error("search timed out after {after:?}")]
    Timeout {
        /// Deadline that was exceeded.
        after: Duration,
    },
}
