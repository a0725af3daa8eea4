//! Weighted suitability score

use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

/// Multipliers applied to each extracted signal. These are part of the
/// scoring policy and are never read from configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub education_sentence: u32,
    pub experience_sentence: u32,
    pub experience_year: u32,
    pub technical_skill: u32,
    pub soft_skill: u32,
}

impl ScoringWeights {
    pub const EDUCATION_SENTENCE: u32 = 5;
    pub const EXPERIENCE_SENTENCE: u32 = 3;
    pub const EXPERIENCE_YEAR: u32 = 2;
    pub const TECHNICAL_SKILL: u32 = 2;
    pub const SOFT_SKILL: u32 = 1;

    pub fn with_soft_skill_weight(mut self, weight: u32) -> Self {
        self.soft_skill = weight;
        self
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            education_sentence: Self::EDUCATION_SENTENCE,
            experience_sentence: Self::EXPERIENCE_SENTENCE,
            experience_year: Self::EXPERIENCE_YEAR,
            technical_skill: Self::TECHNICAL_SKILL,
            soft_skill: Self::SOFT_SKILL,
        }
    }
}

/// Counts the scorer consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInputs {
    pub education_sentences: usize,
    pub experience_sentences: usize,
    pub experience_years: u32,
    pub technical_skills: usize,
    pub soft_skills: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Raw weighted sum, saturating instead of overflowing.
    pub fn raw_total(&self, inputs: &ScoreInputs) -> u64 {
        let w = &self.weights;
        let term = |count: u64, weight: u32| count.saturating_mul(u64::from(weight));

        [
            term(inputs.education_sentences as u64, w.education_sentence),
            term(inputs.experience_sentences as u64, w.experience_sentence),
            term(u64::from(inputs.experience_years), w.experience_year),
            term(inputs.technical_skills as u64, w.technical_skill),
            term(inputs.soft_skills as u64, w.soft_skill),
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }

    /// Weighted sum clamped to `0..=100`.
    pub fn score(&self, inputs: &ScoreInputs) -> u8 {
        self.raw_total(inputs).min(u64::from(MAX_SCORE)) as u8
    }
}
