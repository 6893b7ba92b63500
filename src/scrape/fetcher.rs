use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::FetchConfig;
use crate::models::Result;
use crate::scrape::types::{FetchOutcome, FetchResult};

/// Retrieves raw page content, one attempt per URL. Implementations never
/// return an error; a bad URL is a `FetchOutcome::Failure` local to that URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        debug!("🌐 Fetching: {}", url);
        // A non-2xx status is not a failure here; whatever body the server
        // sent still goes to extraction.
        let outcome = match self.client.get(url).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => FetchOutcome::Success(body),
                Err(e) => FetchOutcome::Failure(e.to_string()),
            },
            Err(e) => FetchOutcome::Failure(e.to_string()),
        };
        FetchResult {
            url: url.to_string(),
            outcome,
        }
    }
}
