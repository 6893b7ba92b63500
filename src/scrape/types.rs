use std::time::Duration;

/// What came back for a single URL. A failure carries the reason so the
/// caller can log it; it never aborts the surrounding run.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub outcome: FetchOutcome,
}

/// One scraped website with every distinct contact found on it, in the
/// order the page first showed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    pub website: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl LeadRecord {
    pub fn has_email(&self) -> bool {
        !self.emails.is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phones.is_empty()
    }
}

pub type LeadTable = Vec<LeadRecord>;

/// Counters for one pipeline run. Every discovered URL lands in exactly
/// one of: fetch_failures, pages_without_contacts, records_filtered_out,
/// or a row of the final table.
#[derive(Debug, Clone, Default)]
pub struct ScrapeStats {
    pub urls_discovered: usize,
    pub pages_fetched: usize,
    pub fetch_failures: usize,
    pub pages_without_contacts: usize,
    pub records_filtered_out: usize,
    pub duration: Duration,
}

impl ScrapeStats {
    /// Records that held at least one contact, whether or not the active
    /// criterion kept them.
    pub fn records_extracted(&self) -> usize {
        self.pages_fetched - self.pages_without_contacts
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub table: LeadTable,
    pub stats: ScrapeStats,
}
