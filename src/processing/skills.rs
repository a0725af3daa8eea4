//! Skill extraction over noun chunks and tokens

use crate::processing::linguistics::{Analysis, TokenKind};
use crate::processing::patterns::{PatternRegistry, REQUIRED_SKILL_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Skills shorter than this never match inside a chunk, only as a whole token.
const MIN_CHUNK_SKILL_LEN: usize = 3;

/// Matched skills per category, lowercased and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeMap<String, BTreeSet<String>>);

impl Default for SkillSet {
    fn default() -> Self {
        let categories = REQUIRED_SKILL_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), BTreeSet::new()))
            .collect();
        Self(categories)
    }
}

impl SkillSet {
    pub fn insert(&mut self, category: &str, skill: &str) {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(skill.to_string());
    }

    pub fn category(&self, category: &str) -> impl Iterator<Item = &str> {
        self.0.get(category).into_iter().flatten().map(String::as_str)
    }

    pub fn count(&self, category: &str) -> usize {
        self.0.get(category).map_or(0, BTreeSet::len)
    }

    pub fn technical_count(&self) -> usize {
        self.count("technical")
    }

    pub fn soft_count(&self) -> usize {
        self.count("soft")
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}

pub fn extract_skills(analysis: &Analysis, patterns: &PatternRegistry) -> SkillSet {
    let mut skills = SkillSet::default();
    let table = patterns.skills();

    for chunk in &analysis.noun_chunks {
        let chunk_text = chunk.text.to_lowercase();
        for (category, candidates) in table {
            for skill in candidates {
                if skill.len() >= MIN_CHUNK_SKILL_LEN && chunk_text.contains(skill.as_str()) {
                    skills.insert(category, skill);
                }
            }
        }
    }

    for token in analysis.tokens.iter().filter(|t| t.kind != TokenKind::Punct) {
        let token_text = token.text().to_lowercase();
        for (category, candidates) in table {
            if let Some(skill) = candidates.iter().find(|s| **s == token_text) {
                skills.insert(category, skill);
            }
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::linguistics::{LinguisticAnalyzer, RuleBasedAnalyzer};

    fn skills_for(text: &str) -> SkillSet {
        let patterns = PatternRegistry::defaults().unwrap();
        let analysis = RuleBasedAnalyzer::new().analyze(text);
        extract_skills(&analysis, &patterns)
    }

    #[test]
    fn test_chunk_and_token_passes() {
        let skills =
            skills_for("Built machine learning models in Python and C++ with strong leadership.");
        let technical: Vec<&str> = skills.category("technical").collect();

        assert!(technical.contains(&"machine learning"));
        assert!(technical.contains(&"python"));
        assert!(technical.contains(&"c++"));
        assert_eq!(skills.category("soft").collect::<Vec<_>>(), vec!["leadership"]);
    }

    #[test]
    fn test_skills_are_deduplicated() {
        let skills = skills_for("Python. python. PYTHON.");
        assert_eq!(skills.technical_count(), 1);
    }

    #[test]
    fn test_chunk_pass_matches_inside_longer_words() {
        // "git" inside "digital" and "java" inside "javascript"
        let skills = skills_for("Digital javascript tooling");
        let technical: Vec<&str> = skills.category("technical").collect();
        assert!(technical.contains(&"git"));
        assert!(technical.contains(&"java"));
        assert!(technical.contains(&"javascript"));
    }

    #[test]
    fn test_empty_categories_are_present() {
        let skills = skills_for("No relevant content.");
        assert_eq!(skills.technical_count(), 0);
        assert_eq!(skills.soft_count(), 0);
        assert_eq!(skills.categories().count(), 2);
        assert_eq!(skills.total(), 0);
    }

    #[test]
    fn test_serializes_as_sorted_lists() {
        let mut skills = SkillSet::default();
        skills.insert("technical", "sql");
        skills.insert("technical", "aws");
        let json = serde_json::to_value(&skills).unwrap();
        assert_eq!(json["technical"], serde_json::json!(["aws", "sql"]));
        assert_eq!(json["soft"], serde_json::json!([]));
    }
}
