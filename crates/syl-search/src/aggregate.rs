//! Per-lesson resource aggregation.
//!
//! One search per lesson is dispatched concurrently. Each lesson task
//! recovers its own failure (error, timeout, or panic) as zero results, and
//! the merge waits for every task before concatenating in lesson order:
//!
//! ```text
//! lessons ──┬─ search(lesson 1) ─┐
//!           ├─ search(lesson 2) ─┼─ join all ─ order by lesson ─ dedupe ─ cap
//!           └─ search(lesson n) ─┘
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use syl_core::PlanError;
use syl_core::entities::{Resource, ResourceRequest};
use tokio::task::JoinSet;

use crate::{OrganicResult, SearchError, SearchProvider, SearchQuery};

/// Tuning for [`ResourceAggregator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorOptions {
    /// Organic results requested, and kept, per lesson.
    pub results_per_lesson: u32,
    /// Cap on the merged list.
    pub max_resources: usize,
    /// Deadline for each lesson's search.
    pub request_timeout: Duration,
    /// Drop hits whose URL already appeared for an earlier lesson.
    pub dedupe_urls: bool,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            results_per_lesson: 3,
            max_resources: 6,
            request_timeout: Duration::from_secs(10),
            dedupe_urls: true,
        }
    }
}

/// Build the search query for one lesson.
#[must_use]
pub fn lesson_query(topic: &str, lesson: &str) -> String {
    format!("{topic} {lesson} tutorial")
}

/// Fans lesson searches out to a [`SearchProvider`] and merges the hits.
#[derive(Clone)]
pub struct ResourceAggregator {
    provider: Arc<dyn SearchProvider>,
    options: AggregatorOptions,
}

impl ResourceAggregator {
    pub fn new(provider: Arc<dyn SearchProvider>, options: AggregatorOptions) -> Self {
        Self { provider, options }
    }

    #[must_use]
    pub const fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    /// Validate a request, then aggregate resources for its lessons.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::EmptyTopic`] or [`PlanError::EmptyLessonList`]
    /// before any search is issued. Search failures never surface here.
    pub async fn fetch_resources(
        &self,
        request: &ResourceRequest,
    ) -> Result<Vec<Resource>, PlanError> {
        let validated = request.validate()?;
        Ok(self.aggregate(&validated.topic, &validated.lessons).await)
    }

    /// Search every lesson concurrently and merge the results.
    ///
    /// The output is ordered by lesson, then by provider rank within a
    /// lesson, and never longer than `max_resources`. An empty lesson slice
    /// or a provider that fails for every lesson yields an empty list.
    pub async fn aggregate(&self, topic: &str, lessons: &[String]) -> Vec<Resource> {
        if lessons.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            provider = self.provider.name(),
            lessons = lessons.len(),
            "dispatching lesson searches"
        );

        let mut set = JoinSet::new();
        for (idx, lesson) in lessons.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let query =
                SearchQuery::new(lesson_query(topic, lesson), self.options.results_per_lesson);
            let timeout = self.options.request_timeout;
            let lesson = lesson.clone();
            tracing::debug!(query = %query.query, "lesson search");

            set.spawn(async move {
                let hits = search_with_deadline(&*provider, &query, timeout)
                    .await
                    .unwrap_or_else(|e| {
                        tracing::warn!(
                            lesson = %lesson,
                            query = %query.query,
                            %e,
                            "lesson search failed"
                        );
                        Vec::new()
                    });
                (idx, hits)
            });
        }

        let mut per_lesson: Vec<Vec<OrganicResult>> = vec![Vec::new(); lessons.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, hits)) => per_lesson[idx] = hits,
                Err(e) => tracing::warn!(%e, "lesson search task failed"),
            }
        }

        let resources = merge(lessons, per_lesson, &self.options);
        tracing::debug!(resources = resources.len(), "merged lesson resources");
        resources
    }
}

async fn search_with_deadline(
    provider: &dyn SearchProvider,
    query: &SearchQuery,
    timeout: Duration,
) -> Result<Vec<OrganicResult>, SearchError> {
    tokio::time::timeout(timeout, provider.search(query))
        .await
        .unwrap_or(Err(SearchError::Timeout { after: timeout }))
}

/// Concatenate per-lesson hits in lesson order, then dedupe and cap.
fn merge(
    lessons: &[String],
    per_lesson: Vec<Vec<OrganicResult>>,
    options: &AggregatorOptions,
) -> Vec<Resource> {
    let per_lesson_cap = options.results_per_lesson as usize;
    let mut seen = HashSet::new();
    let mut resources = Vec::new();

    for (lesson, hits) in lessons.iter().zip(per_lesson) {
        for hit in hits.into_iter().take(per_lesson_cap) {
            if options.dedupe_urls && !seen.insert(hit.url.clone()) {
                continue;
            }
            resources.push(Resource::from_search_hit(hit.title, hit.url, lesson.as_str()));
        }
    }

    resources.truncate(options.max_resources);
    resources
}
