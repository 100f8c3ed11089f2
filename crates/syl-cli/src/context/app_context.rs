use std::sync::Arc;

use anyhow::Context;
use syl_config::{SearchConfig, SyllabusConfig};
use syl_core::Partitioner;
use syl_search::{AggregatorOptions, ResourceAggregator, SearchProvider, SerperClient};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SyllabusConfig,
    pub partitioner: Partitioner,
    provider: Arc<dyn SearchProvider>,
}

impl AppContext {
    /// Build the production context backed by the Serper API.
    pub fn init(config: SyllabusConfig) -> anyhow::Result<Self> {
        let search = &config.search;
        let provider = SerperClient::new(
            search.api_key.clone(),
            search.endpoint.clone(),
            search.timeout(),
        )
        .context("failed to build search client")?;

        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Build a context around an arbitrary search provider.
    pub fn with_provider(config: SyllabusConfig, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            partitioner: Partitioner::new(config.planner.max_days),
            config,
            provider,
        }
    }

    /// Resource aggregator capped at `max_resources`.
    pub fn aggregator(&self, max_resources: usize) -> ResourceAggregator {
        let options = AggregatorOptions {
            max_resources,
            ..aggregator_options(&self.config.search)
        };
        ResourceAggregator::new(Arc::clone(&self.provider), options)
    }
}

/// Map search configuration onto aggregator tuning.
pub fn aggregator_options(search: &SearchConfig) -> AggregatorOptions {
    AggregatorOptions {
        results_per_lesson: search.results_per_lesson,
        max_resources: usize::try_from(search.max_resources).unwrap_or(usize::MAX),
        request_timeout: search.timeout(),
        dedupe_urls: search.dedupe_urls,
    }
}
