use std::sync::Arc;

use async_trait::async_trait;
use syl_config::SyllabusConfig;
use syl_search::{OrganicResult, SearchError, SearchProvider, SearchQuery};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;

/// Returns `per_query` hits for every query, derived from the query text.
pub struct EchoProvider {
    pub per_query: usize,
}

#[async_trait]
impl SearchProvider for EchoProvider {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError> {
        let slug = query.query.replace(' ', "-").to_lowercase();
        Ok((1..=self.per_query)
            .map(|i| {
                OrganicResult::new(
                    format!("{} #{i}", query.query),
                    format!("https://{slug}.example/{i}"),
                )
            })
            .collect())
    }
}

/// Fails every query.
pub struct OfflineProvider;

#[async_trait]
impl SearchProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError> {
        Err(SearchError::Api {
            status: 503,
            message: "offline".into(),
        })
    }
}

pub fn context(provider: impl SearchProvider + 'static) -> AppContext {
    AppContext::with_provider(SyllabusConfig::default(), Arc::new(provider))
}

pub fn flags(limit: Option<u32>) -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        limit,
        quiet: true,
    }
}
