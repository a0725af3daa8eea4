//! Contact information extraction

use crate::processing::linguistics::{Analysis, EntityLabel};
use crate::processing::patterns::PatternRegistry;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact details found in a resume. Every field is independently optional
/// and holds the raw matched text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl ContactInfo {
    /// Field labels and values in display order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("Full name", self.full_name.as_deref()),
            ("Address", self.address.as_deref()),
            ("Email", self.email.as_deref()),
            ("Age", self.age.as_deref()),
            ("Gender", self.gender.as_deref()),
        ]
    }

    pub fn found_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| v.is_some()).count()
    }
}

pub fn extract_contact_info(
    text: &str,
    analysis: &Analysis,
    patterns: &PatternRegistry,
) -> ContactInfo {
    let full_name = analysis
        .first_entity(EntityLabel::Person)
        .map(|e| e.text().to_string());

    let address = first_match(patterns.address(), text).or_else(|| {
        analysis
            .first_entity(EntityLabel::Location)
            .map(|e| e.text().to_string())
    });

    ContactInfo {
        full_name,
        address,
        email: first_match(patterns.email(), text),
        age: first_capture(patterns.age(), text),
        gender: first_capture(patterns.gender(), text),
    }
}

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// First capture group of the first match, falling back to the whole match
/// for patterns configured without a group.
fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(0))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::linguistics::{LinguisticAnalyzer, RuleBasedAnalyzer};

    fn extract(text: &str) -> ContactInfo {
        let patterns = PatternRegistry::defaults().unwrap();
        let analysis = RuleBasedAnalyzer::new().analyze(text);
        extract_contact_info(text, &analysis, &patterns)
    }

    #[test]
    fn test_email_extraction() {
        let contact = extract("Email: jane.doe@example.com");
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_age_number_extraction() {
        let contact = extract("Age: 29");
        assert_eq!(contact.age.as_deref(), Some("29"));
    }

    #[test]
    fn test_age_date_forms_are_kept_raw() {
        assert_eq!(extract("D.O.B.: 04/07/1993").age.as_deref(), Some("04/07/1993"));
        assert_eq!(extract("date of birth - 1/2/88").age.as_deref(), Some("1/2/88"));
        assert_eq!(extract("Born 1990").age, None);
    }

    #[test]
    fn test_gender_is_raw_and_case_insensitive() {
        assert_eq!(extract("SEX: Female").gender.as_deref(), Some("Female"));
        assert_eq!(extract("gender - nb").gender.as_deref(), Some("nb"));
    }

    #[test]
    fn test_address_prefers_pattern_over_location() {
        let contact = extract("Visited Texas.\n123 Main Street, Springfield, IL 62704");
        assert_eq!(contact.address.as_deref(), Some("123 Main Street, Springfield, IL 62704"));
    }

    #[test]
    fn test_address_falls_back_to_location_entity() {
        let contact = extract("Jane Doe\nBased in Seattle");
        assert_eq!(contact.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(contact.address.as_deref(), Some("Seattle"));
    }

    #[test]
    fn test_no_matches_yield_absent_fields() {
        let contact = extract("nothing useful here");
        assert_eq!(contact, ContactInfo::default());
        assert_eq!(contact.found_count(), 0);
    }
}
