use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::discovery::UrlDiscovery;
use crate::models::Query;
use crate::scrape::extractor::ContactExtractor;
use crate::scrape::fetcher::PageFetcher;
use crate::scrape::filter::FilterCriterion;
use crate::scrape::page_text::visible_text;
use crate::scrape::types::{FetchOutcome, FetchResult, LeadRecord, ScrapeReport, ScrapeStats};

/// Verdict of one fetch-extract-filter unit. Failures are carried as data,
/// never raised, so one bad URL cannot disturb its neighbours.
enum UnitOutcome {
    Accepted(LeadRecord),
    FilteredOut,
    NoContacts,
    FetchFailed(String),
}

/// Runs the whole pipeline for one query. Each discovered URL gets its own
/// task under a bounded semaphore; the fetch, the extraction and the
/// criterion check all happen inside that task.
pub struct ScrapeEngine {
    discovery: UrlDiscovery,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<ContactExtractor>,
    max_concurrent_fetches: usize,
}

impl ScrapeEngine {
    pub fn new(
        discovery: UrlDiscovery,
        fetcher: Arc<dyn PageFetcher>,
        extractor: ContactExtractor,
        max_concurrent_fetches: usize,
    ) -> Self {
        Self {
            discovery,
            fetcher,
            extractor: Arc::new(extractor),
            // A zero permit pool would never start a task.
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    /// One complete run. By the time this returns, every discovered URL has
    /// either contributed a table row or been counted in the stats.
    pub async fn run(&self, query: &Query, criterion: FilterCriterion) -> ScrapeReport {
        let started = Instant::now();

        let urls = self.discovery.discover(query).await;
        info!(
            "🌐 Discovered {} candidate URLs for '{}'",
            urls.len(),
            query.search_text()
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_fetches));
        let mut handles = Vec::with_capacity(urls.len());

        for url in &urls {
            let url = url.clone();
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);
            let semaphore = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(_) => return UnitOutcome::FetchFailed("worker pool closed".to_string()),
                };
                process_url(fetcher.as_ref(), &extractor, &url, criterion).await
            }));
        }

        let mut stats = ScrapeStats {
            urls_discovered: urls.len(),
            ..Default::default()
        };
        let mut table = Vec::new();

        // Joined in spawn order, so the table follows discovery order no
        // matter how the fetches interleave.
        for (handle, url) in handles.into_iter().zip(&urls) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => UnitOutcome::FetchFailed(format!("task panicked: {}", e)),
            };
            match outcome {
                UnitOutcome::Accepted(record) => {
                    stats.pages_fetched += 1;
                    table.push(record);
                }
                UnitOutcome::FilteredOut => {
                    stats.pages_fetched += 1;
                    stats.records_filtered_out += 1;
                }
                UnitOutcome::NoContacts => {
                    stats.pages_fetched += 1;
                    stats.pages_without_contacts += 1;
                }
                UnitOutcome::FetchFailed(reason) => {
                    warn!("⏭️  Skipping {}: {}", url, reason);
                    stats.fetch_failures += 1;
                }
            }
        }

        stats.duration = started.elapsed();
        info!(
            "✅ Scrape finished: {}/{} pages fetched, {} leads kept, {:?} elapsed",
            stats.pages_fetched,
            stats.urls_discovered,
            table.len(),
            stats.duration
        );

        ScrapeReport { table, stats }
    }
}

async fn process_url(
    fetcher: &dyn PageFetcher,
    extractor: &ContactExtractor,
    url: &str,
    criterion: FilterCriterion,
) -> UnitOutcome {
    let FetchResult { url, outcome } = fetcher.fetch(url).await;
    let body = match outcome {
        FetchOutcome::Success(body) => body,
        FetchOutcome::Failure(reason) => return UnitOutcome::FetchFailed(reason),
    };

    let text = visible_text(&body);
    let (emails, phones) = extractor.extract(&text);
    if emails.is_empty() && phones.is_empty() {
        debug!("No contacts on {}", url);
        return UnitOutcome::NoContacts;
    }

    let record = LeadRecord {
        website: url,
        emails,
        phones,
    };
    if criterion.accepts(&record) {
        UnitOutcome::Accepted(record)
    } else {
        debug!("Criterion dropped {}", record.website);
        UnitOutcome::FilteredOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::SearchProvider;
    use crate::models::{Region, Result};
    use crate::scrape::extractor::PhonePolicy;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubProvider {
        links: Vec<String>,
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn search(&self, _query_text: &str, _result_cap: usize) -> Result<Vec<String>> {
            Ok(self.links.clone())
        }
    }

    struct StubFetcher {
        pages: HashMap<String, FetchOutcome>,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> FetchResult {
            let outcome = self
                .pages
                .get(url)
                .cloned()
                .unwrap_or_else(|| FetchOutcome::Failure("unknown url".to_string()));
            FetchResult {
                url: url.to_string(),
                outcome,
            }
        }
    }

    fn engine_over(urls: &[&str], pages: &[(&str, FetchOutcome)]) -> ScrapeEngine {
        let provider = Arc::new(StubProvider {
            links: urls.iter().map(|s| s.to_string()).collect(),
        });
        let discovery = UrlDiscovery::new(provider, 20);
        let fetcher = Arc::new(StubFetcher {
            pages: pages
                .iter()
                .map(|(url, outcome)| (url.to_string(), outcome.clone()))
                .collect(),
        });
        let extractor = ContactExtractor::new(&PhonePolicy::unrestricted()).unwrap();
        ScrapeEngine::new(discovery, fetcher, extractor, 4)
    }

    fn query(keyword: &str) -> Query {
        Query::new(keyword, Region::Unscoped).unwrap()
    }

    fn page(body: &str) -> FetchOutcome {
        FetchOutcome::Success(format!("<html><body>{}</body></html>", body))
    }

    #[tokio::test]
    async fn one_bad_url_leaves_the_others_standing() {
        let engine = engine_over(
            &["https://a.example", "https://b.example", "https://c.example"],
            &[
                ("https://a.example", page("mail a@a.example now")),
                (
                    "https://b.example",
                    FetchOutcome::Failure("connect timeout".to_string()),
                ),
                ("https://c.example", page("call 1234567890")),
            ],
        );

        let report = engine.run(&query("bakery"), FilterCriterion::All).await;

        assert_eq!(report.table.len(), 2);
        assert_eq!(report.stats.urls_discovered, 3);
        assert_eq!(report.stats.pages_fetched, 2);
        assert_eq!(report.stats.fetch_failures, 1);
    }

    #[tokio::test]
    async fn strict_criterion_can_empty_the_table() {
        let engine = engine_over(
            &["https://a.example", "https://c.example"],
            &[
                ("https://a.example", page("mail a@a.example now")),
                ("https://c.example", page("call 1234567890")),
            ],
        );

        let report = engine
            .run(&query("bakery"), FilterCriterion::EmailAndPhone)
            .await;

        assert!(report.table.is_empty());
        assert_eq!(report.stats.records_filtered_out, 2);
        assert_eq!(report.stats.records_extracted(), 2);
    }

    #[tokio::test]
    async fn table_follows_discovery_order() {
        let engine = engine_over(
            &["https://z.example", "https://a.example", "https://m.example"],
            &[
                ("https://z.example", page("z@z.example")),
                ("https://a.example", page("a@a.example")),
                ("https://m.example", page("m@m.example")),
            ],
        );

        let first = engine.run(&query("bakery"), FilterCriterion::All).await;
        let second = engine.run(&query("bakery"), FilterCriterion::All).await;

        let order: Vec<&str> = first.table.iter().map(|r| r.website.as_str()).collect();
        assert_eq!(
            order,
            vec!["https://z.example", "https://a.example", "https://m.example"]
        );
        assert_eq!(first.table, second.table);
    }

    #[tokio::test]
    async fn contactless_pages_never_reach_the_table() {
        let engine = engine_over(
            &["https://a.example", "https://b.example"],
            &[
                ("https://a.example", page("just prose, nothing to harvest")),
                ("https://b.example", page("write b@b.example")),
            ],
        );

        let report = engine.run(&query("bakery"), FilterCriterion::All).await;

        assert_eq!(report.table.len(), 1);
        assert_eq!(report.table[0].website, "https://b.example");
        assert_eq!(report.stats.pages_without_contacts, 1);
    }

    #[tokio::test]
    async fn empty_discovery_means_an_empty_report() {
        let engine = engine_over(&[], &[]);

        let report = engine.run(&query("bakery"), FilterCriterion::All).await;

        assert!(report.table.is_empty());
        assert_eq!(report.stats.urls_discovered, 0);
        assert_eq!(report.stats.pages_fetched, 0);
    }

    #[tokio::test]
    async fn record_keeps_contacts_in_page_order() {
        let engine = engine_over(
            &["https://a.example"],
            &[(
                "https://a.example",
                page("mail second@a.example, call 9876543210, or mail second@a.example"),
            )],
        );

        let report = engine.run(&query("bakery"), FilterCriterion::All).await;

        assert_eq!(report.table.len(), 1);
        assert_eq!(report.table[0].emails, vec!["second@a.example"]);
        assert_eq!(report.table[0].phones, vec!["9876543210"]);
    }
}
