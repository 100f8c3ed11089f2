//! Aggregator behavior against scripted in-process providers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use syl_core::PlanError;
use syl_core::entities::ResourceRequest;
use syl_core::enums::ResourceKind;
use syl_search::{
    AggregatorOptions, OrganicResult, ResourceAggregator, SearchError, SearchProvider, SearchQuery,
};

#[derive(Clone)]
enum Reply {
    Hits(Vec<OrganicResult>),
    Delayed(Duration, Vec<OrganicResult>),
    Fail,
    Hang,
    Panic,
}

/// Answers by exact query string; unknown queries return no hits.
#[derive(Default)]
struct ScriptedProvider {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl ScriptedProvider {
    fn reply(mut self, query: &str, reply: Reply) -> Self {
        self.replies.insert(query.to_string(), reply);
        self
    }

    fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError> {
        self.calls.lock().unwrap().push(query.clone());
        match self.replies.get(&query.query).cloned() {
            None => Ok(Vec::new()),
            Some(Reply::Hits(hits)) => Ok(hits),
            Some(Reply::Delayed(delay, hits)) => {
                tokio::time::sleep(delay).await;
                Ok(hits)
            }
            Some(Reply::Fail) => Err(SearchError::Api {
                status: 503,
                message: "unavailable".into(),
            }),
            Some(Reply::Hang) => std::future::pending().await,
            Some(Reply::Panic) => panic!("provider blew up"),
        }
    }
}

/// Fails every query.
struct DownProvider;

#[async_trait]
impl SearchProvider for DownProvider {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError> {
        Err(SearchError::MissingResults)
    }
}

fn hits(prefix: &str, n: usize) -> Vec<OrganicResult> {
    (1..=n)
        .map(|i| {
            OrganicResult::new(
                format!("{prefix} result {i}"),
                format!("https://{prefix}.example.org/{i}"),
            )
        })
        .collect()
}

fn lessons(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn aggregator(provider: Arc<dyn SearchProvider>) -> ResourceAggregator {
    ResourceAggregator::new(provider, AggregatorOptions::default())
}

#[tokio::test]
async fn two_lessons_three_hits_each_fill_the_cap() {
    let provider = ScriptedProvider::default()
        .reply("Algebra Quadratics tutorial", Reply::Hits(hits("quad", 3)))
        .reply("Algebra Factoring tutorial", Reply::Hits(hits("fact", 3)));

    let resources = aggregator(Arc::new(provider))
        .aggregate("Algebra", &lessons(&["Quadratics", "Factoring"]))
        .await;

    assert_eq!(resources.len(), 6);
    assert!(resources.iter().all(|r| r.kind == ResourceKind::Article));
    let titles: Vec<&str> = resources.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "quad result 1",
            "quad result 2",
            "quad result 3",
            "fact result 1",
            "fact result 2",
            "fact result 3",
        ]
    );
    assert!(resources[..3].iter().all(|r| r.lesson == "Quadratics"));
    assert!(resources[3..].iter().all(|r| r.lesson == "Factoring"));
}

#[tokio::test]
async fn queries_use_topic_lesson_tutorial_and_result_count() {
    let provider = Arc::new(ScriptedProvider::default());
    aggregator(provider.clone())
        .aggregate("Biology", &lessons(&["Cells", "Genetics"]))
        .await;

    let mut calls = provider.calls();
    calls.sort_by(|a, b| a.query.cmp(&b.query));
    assert_eq!(
        calls,
        vec![
            SearchQuery::new("Biology Cells tutorial", 3),
            SearchQuery::new("Biology Genetics tutorial", 3),
        ]
    );
}

#[tokio::test]
async fn never_more_than_six_resources() {
    for lesson_count in 0..=8 {
        for per_lesson in 0..=5 {
            let names: Vec<String> = (0..lesson_count).map(|i| format!("L{i}")).collect();
            let mut provider = ScriptedProvider::default();
            for name in &names {
                provider = provider.reply(
                    &format!("T {name} tutorial"),
                    Reply::Hits(hits(name, per_lesson)),
                );
            }

            let resources = aggregator(Arc::new(provider)).aggregate("T", &names).await;
            assert!(resources.len() <= 6, "{lesson_count} x {per_lesson}");
            assert_eq!(
                resources.len(),
                (lesson_count * per_lesson.min(3)).min(6),
                "{lesson_count} x {per_lesson}"
            );
        }
    }
}

#[tokio::test]
async fn every_lesson_failing_yields_empty_list() {
    let resources = aggregator(Arc::new(DownProvider))
        .aggregate("Algebra", &lessons(&["A", "B", "C"]))
        .await;
    assert!(resources.is_empty());
}

#[tokio::test]
async fn one_failing_lesson_does_not_affect_others() {
    let provider = ScriptedProvider::default()
        .reply("T A tutorial", Reply::Hits(hits("a", 2)))
        .reply("T B tutorial", Reply::Fail)
        .reply("T C tutorial", Reply::Hits(hits("c", 1)));

    let resources = aggregator(Arc::new(provider))
        .aggregate("T", &lessons(&["A", "B", "C"]))
        .await;

    let lessons_seen: Vec<&str> = resources.iter().map(|r| r.lesson.as_str()).collect();
    assert_eq!(lessons_seen, vec!["A", "A", "C"]);
}

#[tokio::test]
async fn hanging_lesson_times_out_as_empty() {
    let provider = ScriptedProvider::default()
        .reply("T Slow tutorial", Reply::Hang)
        .reply("T Fast tutorial", Reply::Hits(hits("fast", 2)));
    let options = AggregatorOptions {
        request_timeout: Duration::from_millis(100),
        ..Default::default()
    };

    let started = Instant::now();
    let resources = ResourceAggregator::new(Arc::new(provider), options)
        .aggregate("T", &lessons(&["Slow", "Fast"]))
        .await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(resources.len(), 2);
    assert!(resources.iter().all(|r| r.lesson == "Fast"));
}

#[tokio::test]
async fn panicking_lesson_is_isolated() {
    let provider = ScriptedProvider::default()
        .reply("T Boom tutorial", Reply::Panic)
        .reply("T Fine tutorial", Reply::Hits(hits("fine", 1)));

    let resources = aggregator(Arc::new(provider))
        .aggregate("T", &lessons(&["Boom", "Fine"]))
        .await;

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].lesson, "Fine");
}

#[tokio::test]
async fn slow_first_lesson_still_merges_first() {
    let provider = ScriptedProvider::default()
        .reply(
            "T First tutorial",
            Reply::Delayed(Duration::from_millis(150), hits("first", 1)),
        )
        .reply("T Second tutorial", Reply::Hits(hits("second", 1)));

    let resources = aggregator(Arc::new(provider))
        .aggregate("T", &lessons(&["First", "Second"]))
        .await;

    let titles: Vec<&str> = resources.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["first result 1", "second result 1"]);
}

#[tokio::test]
async fn lesson_searches_run_concurrently() {
    let names = lessons(&["A", "B", "C", "D", "E"]);
    let mut provider = ScriptedProvider::default();
    for name in &names {
        provider = provider.reply(
            &format!("T {name} tutorial"),
            Reply::Delayed(Duration::from_millis(300), hits(name, 1)),
        );
    }

    let started = Instant::now();
    let resources = aggregator(Arc::new(provider)).aggregate("T", &names).await;

    assert_eq!(resources.len(), 5);
    // Sequential dispatch would need at least 1.5s.
    assert!(started.elapsed() < Duration::from_millis(1200));
}

#[tokio::test]
async fn duplicate_urls_across_lessons_are_dropped() {
    let shared = OrganicResult::new("Shared guide", "https://guide.example.org");
    let provider = ScriptedProvider::default()
        .reply("T A tutorial", Reply::Hits(vec![shared.clone()]))
        .reply("T B tutorial", Reply::Hits(vec![shared, hits("b", 1).remove(0)]));

    let resources = aggregator(Arc::new(provider))
        .aggregate("T", &lessons(&["A", "B"]))
        .await;

    let urls: Vec<&str> = resources.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["https://guide.example.org", "https://b.example.org/1"]);
    assert_eq!(resources[0].lesson, "A");
}

#[tokio::test]
async fn youtube_hits_become_videos() {
    let provider = ScriptedProvider::default().reply(
        "T A tutorial",
        Reply::Hits(vec![
            OrganicResult::new("Watch", "https://www.youtube.com/watch?v=x"),
            OrganicResult::new("Read", "https://read.example.org"),
        ]),
    );

    let resources = aggregator(Arc::new(provider))
        .aggregate("T", &lessons(&["A"]))
        .await;

    assert_eq!(resources[0].kind, ResourceKind::Video);
    assert_eq!(resources[1].kind, ResourceKind::Article);
}

#[tokio::test]
async fn empty_lesson_slice_issues_no_searches() {
    let provider = Arc::new(ScriptedProvider::default());
    let resources = aggregator(provider.clone()).aggregate("T", &[]).await;
    assert!(resources.is_empty());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn fetch_resources_validates_before_searching() {
    let provider = Arc::new(ScriptedProvider::default());
    let agg = aggregator(provider.clone());

    let err = agg
        .fetch_resources(&ResourceRequest::new("Algebra", " , ,"))
        .await
        .unwrap_err();
    assert_eq!(err, PlanError::EmptyLessonList);

    let err = agg
        .fetch_resources(&ResourceRequest::new("  ", "A"))
        .await
        .unwrap_err();
    assert_eq!(err, PlanError::EmptyTopic);

    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn fetch_resources_normalizes_lessons() {
    let provider = ScriptedProvider::default()
        .reply("Algebra Factoring tutorial", Reply::Hits(hits("f", 1)));

    let resources = aggregator(Arc::new(provider))
        .fetch_resources(&ResourceRequest::new(" Algebra ", " Factoring ,"))
        .await
        .unwrap();

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].lesson, "Factoring");
}
