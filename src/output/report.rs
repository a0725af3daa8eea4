//! Evaluation report record

use crate::processing::contact::ContactInfo;
use crate::processing::sections::SectionMatches;
use crate::processing::skills::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything extracted from one document, plus its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub contact_info: ContactInfo,
    pub education: SectionMatches,
    pub experience: SectionMatches,
    pub skills: SkillSet,
    pub experience_years: u32,
    /// Always within `0..=100`.
    pub score: u8,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub evaluator_version: String,
    pub analyzer: String,
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(analyzer: &str) -> Self {
        Self {
            source: None,
            generated_at: Utc::now(),
            evaluator_version: env!("CARGO_PKG_VERSION").to_string(),
            analyzer: analyzer.to_string(),
            processing_time_ms: 0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl EvaluationReport {
    /// Compose extractor outputs into one record. No validation happens here.
    pub fn assemble(
        contact_info: ContactInfo,
        education: SectionMatches,
        experience: SectionMatches,
        skills: SkillSet,
        experience_years: u32,
        score: u8,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            contact_info,
            education,
            experience,
            skills,
            experience_years,
            score,
            metadata,
        }
    }
}
