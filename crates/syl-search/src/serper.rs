//! Serper (google.serper.dev) search client.

use std::time::Duration;

use async_trait::async_trait;

use crate::{OrganicResult, SearchError, SearchProvider, SearchQuery, http::check_response};

#[derive(serde::Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: u32,
}

#[derive(serde::Deserialize)]
struct SerperResponse {
    organic: Option<Vec<SerperOrganic>>,
}

#[derive(serde::Deserialize)]
struct SerperOrganic {
    title: String,
    link: String,
}

/// HTTP client for the Serper web search API.
pub struct SerperClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SerperClient {
    /// Create a client for `endpoint` (e.g. `https://google.serper.dev`).
    ///
    /// `timeout` bounds each request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("syllabus/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    fn name(&self) -> &'static str {
        "serper"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<OrganicResult>, SearchError> {
        let url = format!("{}/search", self.endpoint);
        let resp = self
            .http
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&SerperRequest {
                q: &query.query,
                num: query.result_count,
            })
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        parse_organic(&body)
    }
}

/// Extract organic hits from a Serper response body.
fn parse_organic(body: &str) -> Result<Vec<OrganicResult>, SearchError> {
    let data: SerperResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    let organic = data.organic.ok_or(SearchError::MissingResults)?;
    Ok(organic
        .into_iter()
        .map(|hit| OrganicResult {
            title: hit.title,
            url: hit.link,
        })
        .collect())
}
