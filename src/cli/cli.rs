use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::discovery::{SerpApiClient, UrlDiscovery};
use crate::export::LeadExporter;
use crate::geo::IpLocator;
use crate::models::CliApp;
use crate::scrape::{ContactExtractor, HttpFetcher, PhonePolicy, ScrapeEngine};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone)]
pub enum MenuAction {
    ScrapeLeads,
    ShowSettings,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::ScrapeLeads => {
                write!(f, "🔍 Scrape leads for a keyword")
            }
            MenuAction::ShowSettings => write!(f, "⚙️  Show active settings"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let api_key = match std::env::var("SERPAPI_KEY") {
            Ok(key) => key,
            Err(_) => {
                warn!("⚠️  No SERPAPI_KEY in environment; discovery will come back empty");
                String::new()
            }
        };

        let provider = Arc::new(SerpApiClient::new(api_key, &config.search)?);
        let discovery = UrlDiscovery::new(provider, config.search.result_cap);
        let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
        let extractor = ContactExtractor::new(&PhonePolicy::from_config(&config.extraction))?;
        let engine = ScrapeEngine::new(
            discovery,
            fetcher,
            extractor,
            config.fetch.max_concurrent_fetches,
        );
        let exporter = LeadExporter::new(config.output.directory.clone());
        let locator = IpLocator::new(Duration::from_secs(config.search.api_timeout_seconds))?;

        info!("Pipeline components initialized");

        Ok(Self {
            config,
            engine,
            exporter,
            locator,
        })
    }
}
