pub mod engine;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod page_text;
pub mod types;

pub use engine::ScrapeEngine;
pub use extractor::{ContactExtractor, PhonePolicy};
pub use fetcher::HttpFetcher;
pub use filter::FilterCriterion;
pub use types::{LeadRecord, ScrapeReport};
