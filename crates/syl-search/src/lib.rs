//! # syl-search
//!
//! Search provider clients and per-lesson resource aggregation for Syllabus.
//!
//! The aggregator depends only on the narrow [`SearchProvider`] contract:
//! a query string and a result count in, an ordered list of organic
//! `{ title, url }` hits out. [`SerperClient`] is the production provider;
//! tests inject fakes.

mod aggregate;
mod error;
mod http;
pub mod serper;

pub use aggregate::{AggregatorOptions, ResourceAggregator, lesson_query};
pub use error::SearchError;
pub use serper::SerperClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    /// Maximum number of organic results wanted.
    pub result_count: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, result_count: u32) -> Self {
        Self {
            query: query.into(),
            result_count,
        }
    }
}

/// A non-paid search hit, in provider rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    pub title: String,
    pub url: String,
}

impl OrganicResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

// ── Provider contract ──────────────────────────────────────────────

/// External web search used to find resources for a lesson.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Run one search and return organic hits in rank order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport failure, non-success status, or
    /// a malformed response.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError>;
}
