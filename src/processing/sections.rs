//! Keyword-driven section statements (education, experience)

use crate::processing::linguistics::Analysis;
use crate::processing::patterns::{KeywordList, PatternRegistry};
use crate::processing::text_processor::normalize;
use serde::{Deserialize, Serialize};

/// Normalized sentences that mention a section keyword, in document order.
/// Repeated sentences are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMatches(pub Vec<String>);

impl SectionMatches {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

pub fn extract_section(analysis: &Analysis, keywords: &KeywordList) -> SectionMatches {
    SectionMatches(
        analysis
            .sentences
            .iter()
            .filter(|sentence| keywords.matches(&sentence.text.to_lowercase()))
            .map(|sentence| normalize(&sentence.text))
            .collect(),
    )
}

pub fn extract_education(analysis: &Analysis, patterns: &PatternRegistry) -> SectionMatches {
    extract_section(analysis, patterns.education())
}

pub fn extract_experience(analysis: &Analysis, patterns: &PatternRegistry) -> SectionMatches {
    extract_section(analysis, patterns.experience())
}
