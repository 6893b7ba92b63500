use std::fmt;

use crate::{config::Config, export::LeadExporter, geo::IpLocator, scrape::ScrapeEngine};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Fixed list of selectable regions. Index 0 is the unscoped sentinel; the
/// rest bias the search query with an "in <state>" qualifier.
pub const REGION_LABELS: [&str; 31] = [
    "All India",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Unscoped,
    Scoped(String),
}

impl Region {
    /// Parses a label against the fixed list. The sentinel label yields
    /// `Unscoped`; unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label == REGION_LABELS[0] {
            return Some(Region::Unscoped);
        }
        REGION_LABELS[1..]
            .iter()
            .find(|&&known| known == label)
            .map(|&known| Region::Scoped(known.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Region::Unscoped => REGION_LABELS[0],
            Region::Scoped(state) => state,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validated search query. The keyword is trimmed and guaranteed non-empty
/// once constructed; nothing downstream re-checks it.
#[derive(Debug, Clone)]
pub struct Query {
    keyword: String,
    region: Region,
}

impl Query {
    pub fn new(keyword: &str, region: Region) -> Result<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err("keyword must not be empty".into());
        }
        Ok(Self {
            keyword: keyword.to_string(),
            region,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The text sent to the search provider, with the locality qualifier
    /// appended when the query is region-scoped.
    pub fn search_text(&self) -> String {
        match &self.region {
            Region::Unscoped => self.keyword.clone(),
            Region::Scoped(state) => format!("{} in {}", self.keyword, state),
        }
    }
}

pub struct CliApp {
    pub config: Config,
    pub engine: ScrapeEngine,
    pub exporter: LeadExporter,
    pub locator: IpLocator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parse_known_state() {
        assert_eq!(
            Region::parse("Karnataka"),
            Some(Region::Scoped("Karnataka".to_string()))
        );
    }

    #[test]
    fn region_parse_sentinel_is_unscoped() {
        assert_eq!(Region::parse("All India"), Some(Region::Unscoped));
    }

    #[test]
    fn region_parse_unknown_label() {
        assert_eq!(Region::parse("Atlantis"), None);
        assert_eq!(Region::parse(""), None);
    }

    #[test]
    fn query_rejects_blank_keyword() {
        assert!(Query::new("", Region::Unscoped).is_err());
        assert!(Query::new("   \t", Region::Unscoped).is_err());
    }

    #[test]
    fn query_trims_keyword() {
        let query = Query::new("  bakery  ", Region::Unscoped).unwrap();
        assert_eq!(query.keyword(), "bakery");
        assert_eq!(query.search_text(), "bakery");
    }

    #[test]
    fn query_search_text_appends_region() {
        let query = Query::new("sports shop", Region::Scoped("Kerala".to_string())).unwrap();
        assert_eq!(query.search_text(), "sports shop in Kerala");
    }
}
