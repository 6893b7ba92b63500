use std::fmt;

use crate::scrape::types::LeadRecord;

/// User-selected shape of the final table. Applied per record, after
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCriterion {
    All,
    EmailOnly,
    PhoneOnly,
    EmailAndPhone,
}

impl FilterCriterion {
    /// Total acceptance predicate. A record with no contacts at all is
    /// rejected under every criterion, `All` included.
    pub fn accepts(&self, record: &LeadRecord) -> bool {
        match self {
            FilterCriterion::All => record.has_email() || record.has_phone(),
            FilterCriterion::EmailOnly => record.has_email() && !record.has_phone(),
            FilterCriterion::PhoneOnly => record.has_phone() && !record.has_email(),
            FilterCriterion::EmailAndPhone => record.has_email() && record.has_phone(),
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FilterCriterion::All => "All leads",
            FilterCriterion::EmailOnly => "Email only",
            FilterCriterion::PhoneOnly => "Phone only",
            FilterCriterion::EmailAndPhone => "Email + Phone",
        };
        write!(f, "{}", label)
    }
}
