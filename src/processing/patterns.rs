//! Pattern registry: compiled field patterns and keyword tables

use crate::config::{Config, KeywordConfig};
use crate::error::{CvEvaluatorError, Result};
use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

/// Pattern keys every configuration must define.
pub const REQUIRED_PATTERNS: &[&str] = &["address", "email", "age", "gender", "year"];

/// Skill categories the scorer depends on.
pub const REQUIRED_SKILL_CATEGORIES: &[&str] = &["technical", "soft"];

/// Immutable set of patterns and keywords shared by all extractors for one run.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    address: Regex,
    email: Regex,
    age: Regex,
    gender: Regex,
    year: Regex,
    education: KeywordList,
    experience: KeywordList,
    skills: BTreeMap<String, Vec<String>>,
}

/// A lowercased keyword list with a substring automaton over it.
#[derive(Debug, Clone)]
pub struct KeywordList {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordList {
    pub fn new(name: &str, keywords: &[String]) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.trim().is_empty())
            .collect();

        let matcher = AhoCorasick::new(&keywords).map_err(|e| {
            CvEvaluatorError::Configuration(format!(
                "Failed to build '{}' keyword matcher: {}",
                name, e
            ))
        })?;

        Ok(Self { keywords, matcher })
    }

    /// True if any keyword occurs anywhere in `lowercase_text`, including
    /// inside a longer word.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.matcher.is_match(lowercase_text)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl PatternRegistry {
    /// Build the registry from the `[patterns]` and `[keywords]` tables.
    pub fn from_config(config: &Config) -> Result<Self> {
        for key in REQUIRED_PATTERNS {
            if !config.patterns.contains_key(*key) {
                return Err(CvEvaluatorError::Configuration(format!(
                    "Missing required pattern '{}'",
                    key
                )));
            }
        }

        let compile = |key: &str, case_insensitive: bool| -> Result<Regex> {
            let source = &config.patterns[key];
            RegexBuilder::new(source)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| {
                    CvEvaluatorError::Configuration(format!("Invalid '{}' pattern: {}", key, e))
                })
        };

        let keywords = &config.keywords;
        let education = Self::required_list(keywords.education.as_deref(), "education")?;
        let experience = Self::required_list(keywords.experience.as_deref(), "experience")?;
        let skills = Self::skill_table(keywords)?;

        Ok(Self {
            address: compile("address", false)?,
            email: compile("email", false)?,
            age: compile("age", true)?,
            gender: compile("gender", true)?,
            year: compile("year", false)?,
            education,
            experience,
            skills,
        })
    }

    /// Registry built from the shipped defaults.
    pub fn defaults() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    fn required_list(list: Option<&[String]>, name: &str) -> Result<KeywordList> {
        let list = list.ok_or_else(|| {
            CvEvaluatorError::Configuration(format!("Missing required keyword list '{}'", name))
        })?;
        KeywordList::new(name, list)
    }

    fn skill_table(keywords: &KeywordConfig) -> Result<BTreeMap<String, Vec<String>>> {
        for category in REQUIRED_SKILL_CATEGORIES {
            if !keywords.skills.contains_key(*category) {
                return Err(CvEvaluatorError::Configuration(format!(
                    "Missing required skill category '{}'",
                    category
                )));
            }
        }

        Ok(keywords
            .skills
            .iter()
            .map(|(category, skills)| {
                let lowered = skills
                    .iter()
                    .map(|s| s.to_lowercase())
                    .filter(|s| !s.trim().is_empty())
                    .collect();
                (category.to_lowercase(), lowered)
            })
            .collect())
    }

    pub fn address(&self) -> &Regex {
        &self.address
    }

    pub fn email(&self) -> &Regex {
        &self.email
    }

    pub fn age(&self) -> &Regex {
        &self.age
    }

    pub fn gender(&self) -> &Regex {
        &self.gender
    }

    pub fn year(&self) -> &Regex {
        &self.year
    }

    pub fn education(&self) -> &KeywordList {
        &self.education
    }

    pub fn experience(&self) -> &KeywordList {
        &self.experience
    }

    /// Skill categories with their lowercased skill strings.
    pub fn skills(&self) -> &BTreeMap<String, Vec<String>> {
        &self.skills
    }
}
