//! Evaluation pipeline: one analysis pass feeding every field extractor

use crate::output::report::{EvaluationReport, ReportMetadata};
use crate::processing::contact::extract_contact_info;
use crate::processing::experience::calculate_experience_years;
use crate::processing::linguistics::{LinguisticAnalyzer, RuleBasedAnalyzer};
use crate::processing::patterns::PatternRegistry;
use crate::processing::scorer::{ScoreInputs, Scorer};
use crate::processing::sections::{extract_education, extract_experience};
use crate::processing::skills::extract_skills;
use crate::processing::text_processor::{clean_document, word_count};
use log::debug;
use std::time::Instant;

/// Runs the extraction-and-scoring pipeline over plain document text.
pub struct Evaluator<'a> {
    patterns: &'a PatternRegistry,
    analyzer: Box<dyn LinguisticAnalyzer>,
    scorer: Scorer,
}

impl<'a> Evaluator<'a> {
    pub fn new(patterns: &'a PatternRegistry) -> Self {
        Self {
            patterns,
            analyzer: Box::new(RuleBasedAnalyzer::new()),
            scorer: Scorer::default(),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Box<dyn LinguisticAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Evaluate a document's text. Fields that cannot be found are left
    /// empty; this never fails.
    ///
    /// Regex-based fields see the decoder output unchanged; only the
    /// linguistic pass runs on the cleaned copy.
    pub fn evaluate(&self, text: &str) -> EvaluationReport {
        let start_time = Instant::now();
        let cleaned = clean_document(text);
        debug!("Evaluating {} words", word_count(&cleaned));

        let analysis = self.analyzer.analyze(&cleaned);
        debug!(
            "Analysis ({}): {} sentences, {} tokens, {} noun chunks, {} entities",
            self.analyzer.analyzer_id(),
            analysis.sentences.len(),
            analysis.tokens.len(),
            analysis.noun_chunks.len(),
            analysis.entities.len()
        );

        let contact_info = extract_contact_info(text, &analysis, self.patterns);
        let education = extract_education(&analysis, self.patterns);
        let experience = extract_experience(&analysis, self.patterns);
        let skills = extract_skills(&analysis, self.patterns);
        let experience_years = calculate_experience_years(text, self.patterns);

        debug!(
            "Extracted {} contact fields, {} education, {} experience, {} skills, {} years",
            contact_info.found_count(),
            education.len(),
            experience.len(),
            skills.total(),
            experience_years
        );

        let score = self.scorer.score(&ScoreInputs {
            education_sentences: education.len(),
            experience_sentences: experience.len(),
            experience_years,
            technical_skills: skills.technical_count(),
            soft_skills: skills.soft_count(),
        });

        let mut metadata = ReportMetadata::new(self.analyzer.analyzer_id());
        metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

        EvaluationReport::assemble(
            contact_info,
            education,
            experience,
            skills,
            experience_years,
            score,
            metadata,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::linguistics::Analysis;
    use crate::processing::scorer::ScoringWeights;

    const RESUME: &str = "Jane Doe\n\
        Email: jane.doe@example.com\n\
        Age: 29\n\
        Gender: Female\n\
        Education\n\
        Bachelor of Science, State University, 2010 - 2014.\n\
        Experience\n\
        Worked as a data engineer at Acme Corp from 2014 to 2020.\n\
        Skills: Python, SQL, Docker, teamwork and communication.";

    #[test]
    fn test_full_evaluation() {
        let patterns = PatternRegistry::defaults().unwrap();
        let report = Evaluator::new(&patterns).evaluate(RESUME);

        assert_eq!(report.contact_info.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(report.contact_info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(report.contact_info.age.as_deref(), Some("29"));
        assert_eq!(report.contact_info.gender.as_deref(), Some("Female"));
        assert_eq!(report.experience_years, 10);
        assert!(report.education.iter().any(|s| s.contains("Bachelor of Science")));
        assert!(report.experience.iter().any(|s| s.starts_with("Worked as a data engineer")));
        assert!(report.skills.category("technical").any(|s| s == "docker"));
        assert!(report.skills.category("soft").any(|s| s == "teamwork"));
        assert!(report.score > 0 && report.score <= 100);
        assert_eq!(report.metadata.analyzer, "rule-based");
    }

    #[test]
    fn test_control_characters_do_not_join_fields() {
        let patterns = PatternRegistry::defaults().unwrap();
        let evaluator = Evaluator::new(&patterns);

        let report = evaluator.evaluate("Email: jane@example.com\u{0c}Page2");
        assert_eq!(report.contact_info.email.as_deref(), Some("jane@example.com"));

        assert_eq!(evaluator.evaluate("Started 2010\u{0c}Left 2020").experience_years, 10);
        assert_eq!(evaluator.evaluate("2010\u{0b}2020").experience_years, 10);
    }

    #[test]
    fn test_empty_signal_scores_zero() {
        let patterns = PatternRegistry::defaults().unwrap();
        let report = Evaluator::new(&patterns).evaluate("Hello there.\nNothing to see.");

        assert!(report.education.is_empty());
        assert!(report.experience.is_empty());
        assert_eq!(report.skills.total(), 0);
        assert_eq!(report.experience_years, 0);
        assert_eq!(report.score, 0);
    }

    struct SilentAnalyzer;

    impl LinguisticAnalyzer for SilentAnalyzer {
        fn analyzer_id(&self) -> &str {
            "silent"
        }

        fn analyze(&self, _text: &str) -> Analysis {
            Analysis::default()
        }
    }

    #[test]
    fn test_pluggable_analyzer_still_runs_regex_fields() {
        let patterns = PatternRegistry::defaults().unwrap();
        let evaluator = Evaluator::new(&patterns).with_analyzer(Box::new(SilentAnalyzer));
        let report = evaluator.evaluate(RESUME);

        assert_eq!(report.contact_info.full_name, None);
        assert_eq!(report.contact_info.email.as_deref(), Some("jane.doe@example.com"));
        assert!(report.education.is_empty());
        assert_eq!(report.experience_years, 10);
        assert_eq!(report.score, 20);
        assert_eq!(report.metadata.analyzer, "silent");
    }

    #[test]
    fn test_custom_soft_skill_weight() {
        let patterns = PatternRegistry::defaults().unwrap();
        let text = "Teamwork, leadership and creativity.";
        let default_score = Evaluator::new(&patterns).evaluate(text).score;
        let weighted = Evaluator::new(&patterns)
            .with_scorer(Scorer::new(ScoringWeights::default().with_soft_skill_weight(4)))
            .evaluate(text)
            .score;

        assert_eq!(default_score, 3);
        assert_eq!(weighted, 12);
    }
}
