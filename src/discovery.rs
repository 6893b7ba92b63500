use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::SearchConfig;
use crate::models::{Query, Result};

const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Links served from the search engine's page cache instead of the site
/// itself. Never worth scraping, so discovery drops them.
const CACHE_PROXY_PREFIX: &str = "https://webcache.googleusercontent.com";

/// External search collaborator: query text in, organic-result links out,
/// in ranking order.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query_text: &str, result_cap: usize) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    link: Option<String>,
}

pub struct SerpApiClient {
    api_key: String,
    client: Client,
}

impl SerpApiClient {
    pub fn new(api_key: String, config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;
        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query_text: &str, result_cap: usize) -> Result<Vec<String>> {
        debug!("🔎 Search API call for: {}", query_text);
        let num = result_cap.to_string();
        let response = self
            .client
            .get(SERPAPI_ENDPOINT)
            .query(&[
                ("engine", "google"),
                ("q", query_text),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("search API returned {}", response.status()).into());
        }

        let parsed: SearchResponse = response.json().await?;
        // Results without a link field carry no URL to visit; skip them.
        let links = parsed
            .organic_results
            .into_iter()
            .filter_map(|result| result.link)
            .collect();
        Ok(links)
    }
}

/// Turns a query into a clean candidate URL list. Provider trouble degrades
/// to an empty list, so "provider down" and "no results" look the same one
/// level up.
pub struct UrlDiscovery {
    provider: Arc<dyn SearchProvider>,
    result_cap: usize,
}

impl UrlDiscovery {
    pub fn new(provider: Arc<dyn SearchProvider>, result_cap: usize) -> Self {
        Self {
            provider,
            result_cap,
        }
    }

    /// Candidate URLs for `query`: provider ranking order, cache-proxy and
    /// malformed links dropped, duplicates removed keeping first occurrence.
    pub async fn discover(&self, query: &Query) -> Vec<String> {
        let query_text = query.search_text();
        let links = match self.provider.search(&query_text, self.result_cap).await {
            Ok(links) => links,
            Err(e) => {
                warn!("💥 Search provider unavailable: {}", e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        for link in links {
            if link.starts_with(CACHE_PROXY_PREFIX) {
                debug!("Dropping cache-proxy link: {}", link);
                continue;
            }
            if Url::parse(&link).is_err() {
                debug!("Dropping malformed link: {}", link);
                continue;
            }
            if seen.insert(link.clone()) {
                urls.push(link);
            }
        }
        urls
    }
}
