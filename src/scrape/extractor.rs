use std::collections::HashSet;

use regex::Regex;

use crate::config::ExtractionConfig;
use crate::models::Result;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Which 10-digit runs count as phone numbers. With the prefix restriction
/// on, only runs starting with one of the configured digits match.
#[derive(Debug, Clone)]
pub struct PhonePolicy {
    restrict_prefix: bool,
    prefix_digits: Vec<u8>,
}

impl PhonePolicy {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        if !config.restrict_phone_prefix {
            return Self::unrestricted();
        }
        Self {
            restrict_prefix: true,
            prefix_digits: config.phone_prefix_digits.clone(),
        }
    }

    pub fn unrestricted() -> Self {
        Self {
            restrict_prefix: false,
            prefix_digits: Vec::new(),
        }
    }

    fn pattern(&self) -> String {
        let class: String = self
            .prefix_digits
            .iter()
            .filter(|digit| **digit <= 9)
            .map(|digit| char::from(b'0' + digit))
            .collect();
        if self.restrict_prefix && !class.is_empty() {
            format!(r"\b[{}]\d{{9}}\b", class)
        } else {
            r"\b\d{10}\b".to_string()
        }
    }
}

/// Pulls contacts out of page text with patterns compiled once at
/// construction. Matches keep their original spelling; deduplication is
/// exact-string, so differently-cased addresses stay distinct.
pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
}

impl ContactExtractor {
    pub fn new(policy: &PhonePolicy) -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(EMAIL_PATTERN)?,
            phone_regex: Regex::new(&policy.pattern())?,
        })
    }

    /// Distinct emails and phones in `text`, each list in first-seen order.
    pub fn extract(&self, text: &str) -> (Vec<String>, Vec<String>) {
        (
            collect_matches(&self.email_regex, text),
            collect_matches(&self.phone_regex, text),
        )
    }
}

fn collect_matches(regex: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for found in regex.find_iter(text) {
        let value = found.as_str().to_string();
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restricted() -> ContactExtractor {
        let policy = PhonePolicy {
            restrict_prefix: true,
            prefix_digits: vec![7, 8, 9, 6],
        };
        ContactExtractor::new(&policy).unwrap()
    }

    #[test]
    fn repeated_email_is_reported_once() {
        let extractor = restricted();
        let (emails, _) = extractor.extract("write to a@b.com or a@b.com today");
        assert_eq!(emails, vec!["a@b.com"]);
    }

    #[test]
    fn differently_cased_emails_stay_distinct() {
        let extractor = restricted();
        let (emails, _) = extractor.extract("Sales@Shop.in and sales@shop.in");
        assert_eq!(emails, vec!["Sales@Shop.in", "sales@shop.in"]);
    }

    #[test]
    fn email_with_plus_and_subdomain_matches() {
        let extractor = restricted();
        let (emails, _) = extractor.extract("reach info+sales@mail.shop.co.in now");
        assert_eq!(emails, vec!["info+sales@mail.shop.co.in"]);
    }

    #[test]
    fn restricted_policy_checks_the_leading_digit() {
        let extractor = restricted();
        let (_, phones) = extractor.extract("call 9876543210 or 1234567890");
        assert_eq!(phones, vec!["9876543210"]);
    }

    #[test]
    fn eleven_digit_runs_never_match() {
        let extractor = restricted();
        let (_, phones) = extractor.extract("ref 98765432101 end");
        assert!(phones.is_empty());
    }

    #[test]
    fn unrestricted_policy_takes_any_ten_digit_run() {
        let extractor = ContactExtractor::new(&PhonePolicy::unrestricted()).unwrap();
        let (_, phones) = extractor.extract("order 1234567890 placed");
        assert_eq!(phones, vec!["1234567890"]);
    }

    #[test]
    fn restriction_without_digits_falls_back_to_any_run() {
        let policy = PhonePolicy {
            restrict_prefix: true,
            prefix_digits: Vec::new(),
        };
        let extractor = ContactExtractor::new(&policy).unwrap();
        let (_, phones) = extractor.extract("order 1234567890 placed");
        assert_eq!(phones, vec!["1234567890"]);
    }

    #[test]
    fn preserved_order_is_first_seen() {
        let extractor = restricted();
        let (_, phones) = extractor.extract("9000000001 then 8000000002 then 9000000001");
        assert_eq!(phones, vec!["9000000001", "8000000002"]);
    }

    #[test]
    fn empty_text_yields_empty_lists() {
        let extractor = restricted();
        let (emails, phones) = extractor.extract("");
        assert!(emails.is_empty());
        assert!(phones.is_empty());
    }
}
