//! Plausibility checks for stored contact fields

use regex::Regex;

pub const RECOGNIZED_GENDERS: &[&str] = &["male", "female", "non-binary", "other"];

/// Whether `gender` is one of [`RECOGNIZED_GENDERS`], ignoring case.
pub fn is_valid_gender(gender: &str) -> bool {
    let gender = gender.trim().to_lowercase();
    RECOGNIZED_GENDERS.contains(&gender.as_str())
}

/// Whether `email_pattern` matches the whole of `email`, not just part of it.
pub fn is_valid_email(email_pattern: &Regex, email: &str) -> bool {
    email_pattern
        .find(email)
        .is_some_and(|m| m.start() == 0 && m.end() == email.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::patterns::PatternRegistry;

    #[test]
    fn test_gender_values() {
        assert!(is_valid_gender("Female"));
        assert!(is_valid_gender("NON-BINARY"));
        assert!(is_valid_gender(" male "));
        assert!(!is_valid_gender("unknown"));
        assert!(!is_valid_gender(""));
    }

    #[test]
    fn test_email_must_match_entirely() {
        let patterns = PatternRegistry::defaults().unwrap();
        let email = patterns.email();

        assert!(is_valid_email(email, "jane.doe@example.com"));
        assert!(!is_valid_email(email, "mail me at jane.doe@example.com"));
        assert!(!is_valid_email(email, "jane.doe@example"));
        assert!(!is_valid_email(email, ""));
    }
}
