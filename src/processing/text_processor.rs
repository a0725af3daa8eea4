//! Text normalization

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should compile"));

/// Collapse every whitespace run (spaces, tabs, line breaks) to a single
/// space and trim both ends. Idempotent.
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Prepare raw decoder output for analysis: unify line endings, turn
/// control characters other than line breaks and tabs into spaces, and strip
/// trailing spaces per line. Line structure is kept because sentence splitting relies
/// on it.
pub fn clean_document(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| if c.is_control() && c != '\t' { ' ' } else { c })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        let text = "  Bachelor of\n\tScience   in   Physics \r\n";
        assert_eq!(normalize(text), "Bachelor of Science in Physics");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("Worked \n at  Acme\t\tCorp.");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_clean_document_keeps_lines() {
        let text = "Jane Doe   \r\nEmail: jane@example.com\u{0c}\rAge: 29";
        let cleaned = clean_document(text);
        assert_eq!(cleaned, "Jane Doe\nEmail: jane@example.com\nAge: 29");
    }

    #[test]
    fn test_clean_document_separates_words_at_control_characters() {
        let cleaned = clean_document("Page1\u{0c}Page2\u{0b}2020\u{0}end");
        assert_eq!(cleaned, "Page1 Page2 2020 end");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two\nthree"), 3);
    }
}
