use super::{SearchOutcome, SearchResult, WebSearch, MAX_RESULTS};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

pub const TAVILY_API_BASE: &str = "https://api.tavily.com";

#[derive(Debug, thiserror::Error)]
pub enum TavilyError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Tavily API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyHit>,
}

#[derive(Debug, Deserialize)]
struct TavilyHit {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

/// Web search restricted to the configured trusted domains.
pub struct TavilyClient {
    client: Client,
    api_key: String,
    api_base: String,
    include_domains: Vec<String>,
}

impl TavilyClient {
    pub fn new(config: &Config) -> Self {
        Self::with_api_base(
            &config.tavily_api_key,
            TAVILY_API_BASE,
            config.trusted_domains.clone(),
        )
    }

    pub fn with_api_base(api_key: &str, api_base: &str, include_domains: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            include_domains,
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, TavilyError> {
        let body = json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": MAX_RESULTS,
            "include_domains": self.include_domains,
        });

        let resp = self
            .client
            .post(format!("{}/search", self.api_base))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api { status, body });
        }

        let parsed: TavilyResponse = resp.json().await?;
        Ok(parsed
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(|hit| SearchResult::new(hit.title, hit.url, hit.content))
            .collect())
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(&self, query: &str) -> SearchOutcome {
        match self.fetch(query).await {
            Ok(results) => {
                info!("Found {} results for '{}'", results.len(), query);
                SearchOutcome::Found(results)
            }
            Err(e) => {
                error!("Tavily search failed for '{}': {:?}", query, e);
                SearchOutcome::Failed(format!("[Error calling Tavily search: {}]", e))
            }
        }
    }
}
