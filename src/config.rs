//! Configuration management for the CV evaluator

use crate::error::{CvEvaluatorError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Named regular expressions, see [`crate::processing::patterns::REQUIRED_PATTERNS`].
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Keyword tables. Entries are optional at the serde level so that a missing
/// list is reported by the pattern registry with its name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordConfig {
    pub education: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub store_path: PathBuf,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

pub const DEFAULT_ADDRESS_PATTERN: &str = r"\d{1,5}\s\w+\s\w+,\s\w+,\s\w+\s\d{5}";
pub const DEFAULT_EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
pub const DEFAULT_AGE_PATTERN: &str = concat!(
    r"\b(?:Age|Born|Birth\s*Date|D\.O\.B\.?|Date\s*of\s*Birth)\s*[:\-]?\s*",
    r"(\d{1,2}/\d{1,2}/\d{2,4}|\d{1,3})\b"
);
pub const DEFAULT_GENDER_PATTERN: &str = r"\b(?:Gender|Sex)\s*[:\-]?\s*(\w+)\b";
pub const DEFAULT_YEAR_PATTERN: &str = r"\b(?:19|20)\d{2}\b";

const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "school", "degree", "bachelor",
    "master", "phd", "diploma", "education", "graduated", "coursework", "certification",
    "training", "online course", "certificate", "diploma program", "associate degree",
];

const DEFAULT_EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience", "worked", "employed", "job", "position", "role",
    "responsibilities", "duties", "internship", "freelance",
];

const DEFAULT_TECHNICAL_SKILLS: &[&str] = &[
    "python", "java", "c++", "javascript", "html", "css", "sql", "machine learning",
    "data analysis", "pandas", "numpy", "django", "flask", "react", "angular",
    "aws", "docker", "kubernetes", "git", "linux", "big data", "tensorflow",
    "pytorch", "scikit-learn", "nosql", "mongodb", "postgresql", "mysql",
];

const DEFAULT_SOFT_SKILLS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem solving", "creativity",
    "time management", "adaptability", "critical thinking", "collaboration",
    "emotional intelligence",
];

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl KeywordConfig {
    /// The keyword tables shipped with the evaluator.
    pub fn builtin() -> Self {
        let mut skills = BTreeMap::new();
        skills.insert("technical".to_string(), to_owned_list(DEFAULT_TECHNICAL_SKILLS));
        skills.insert("soft".to_string(), to_owned_list(DEFAULT_SOFT_SKILLS));

        Self {
            education: Some(to_owned_list(DEFAULT_EDUCATION_KEYWORDS)),
            experience: Some(to_owned_list(DEFAULT_EXPERIENCE_KEYWORDS)),
            skills,
        }
    }
}

/// The pattern table shipped with the evaluator.
pub fn builtin_patterns() -> BTreeMap<String, String> {
    [
        ("address", DEFAULT_ADDRESS_PATTERN),
        ("email", DEFAULT_EMAIL_PATTERN),
        ("age", DEFAULT_AGE_PATTERN),
        ("gender", DEFAULT_GENDER_PATTERN),
        ("year", DEFAULT_YEAR_PATTERN),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for StorageConfig {
    fn default() -> Self {
        let store_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cv-evaluator")
            .join("individuals.json");

        Self {
            store_path,
            enabled: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: builtin_patterns(),
            keywords: KeywordConfig::builtin(),
            storage: StorageConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `explicit` if given, otherwise from the
    /// default location, writing the defaults there on first run.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CvEvaluatorError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let config_path = Self::config_path();

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            let config = Self::default();
            match config.save_to(&config_path) {
                Ok(()) => info!("Wrote default configuration to {}", config_path.display()),
                Err(e) => warn!("Could not write default configuration: {}", e),
            }
            Ok(config)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CvEvaluatorError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| {
                CvEvaluatorError::Configuration(format!("Failed to serialize config: {}", e))
            })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-evaluator")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();

        assert_eq!(parsed.patterns, config.patterns);
        assert_eq!(parsed.keywords.education, config.keywords.education);
        assert_eq!(parsed.keywords.skills.len(), 2);
        assert_eq!(parsed.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_missing_tables_parse_as_empty_patterns() {
        let toml = "[output]\nformat = \"Json\"\ncolor_output = false\npretty_json = false\n";
        let config = Config::from_toml_str(toml).unwrap();
        assert!(config.patterns.is_empty());
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        let err = Config::from_toml_str("patterns = [").unwrap_err();
        assert!(matches!(err, CvEvaluatorError::Configuration(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_fatal() {
        let err = Config::load(Some(Path::new("/nonexistent/cv-evaluator.toml"))).unwrap_err();
        assert!(err.is_startup_fatal());
    }
}
