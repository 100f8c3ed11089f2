//! Search provider configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Default Serper API endpoint.
fn default_endpoint() -> String {
    String::from("https://google.serper.dev")
}

const fn default_results_per_lesson() -> u32 {
    3
}

const fn default_max_resources() -> u32 {
    6
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_dedupe_urls() -> bool {
    true
}

#[derive(Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Serper API key, sent as `X-API-KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the search API (overridable for tests and proxies).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Organic results requested per lesson.
    #[serde(default = "default_results_per_lesson")]
    pub results_per_lesson: u32,

    /// Cap on the merged resource list.
    #[serde(default = "default_max_resources")]
    pub max_resources: u32,

    /// Per-lesson request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Drop resources whose URL was already returned for an earlier lesson.
    #[serde(default = "default_dedupe_urls")]
    pub dedupe_urls: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            results_per_lesson: default_results_per_lesson(),
            max_resources: default_max_resources(),
            timeout_secs: default_timeout_secs(),
            dedupe_urls: default_dedupe_urls(),
        }
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("endpoint", &self.endpoint)
            .field("results_per_lesson", &self.results_per_lesson)
            .field("max_resources", &self.max_resources)
            .field("timeout_secs", &self.timeout_secs)
            .field("dedupe_urls", &self.dedupe_urls)
            .finish()
    }
}

impl SearchConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make every search a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zero = |field: &str| ConfigError::InvalidValue {
            field: format!("search.{field}"),
            reason: "must be at least 1".into(),
        };

        if self.results_per_lesson == 0 {
            return Err(zero("results_per_lesson"));
        }
        if self.max_resources == 0 {
            return Err(zero("max_resources"));
        }
        if self.timeout_secs == 0 {
            return Err(zero("timeout_secs"));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "search.endpoint".into(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        Ok(())
    }
}
