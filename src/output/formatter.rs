//! Report renderers for the console and JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::EvaluationReport;
use crate::processing::sections::SectionMatches;
use colored::{Color, Colorize};

const NOT_FOUND: &str = "Not found";
const NOT_AVAILABLE: &str = "N/A";

/// Trait for rendering an evaluation report
pub trait OutputFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable console rendering with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON rendering of the full report record
pub struct JsonFormatter {
    pretty: bool,
}

/// Dispatches to the formatter for the requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::BrightGreen),
            40..=59 => ("FAIR", Color::Yellow),
            20..=39 => ("WEAK", Color::BrightYellow),
            _ => ("POOR", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_sentences(&self, sentences: &SectionMatches) -> String {
        if sentences.is_empty() {
            return format!("  {}\n", NOT_AVAILABLE);
        }
        sentences
            .iter()
            .map(|sentence| format!("  • {}\n", sentence))
            .collect()
    }

    fn format_list<'a>(&self, items: impl Iterator<Item = &'a str>) -> String {
        let items: Vec<&str> = items.collect();
        if items.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            items.join(", ")
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CV EVALUATION", 1));
        if let Some(source) = &report.metadata.source {
            output.push_str(&format!("Document: {}\n", source));
        }
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Contact Information", 2));
        for (label, value) in report.contact_info.fields() {
            let value = match value {
                Some(v) => v.to_string(),
                None => self.colorize(NOT_FOUND, Color::BrightBlack),
            };
            output.push_str(&format!("{:<10} {}\n", format!("{}:", label), value));
        }

        output.push_str(&self.format_header("Education", 2));
        output.push_str(&self.format_sentences(&report.education));

        output.push_str(&self.format_header("Experience", 2));
        output.push_str(&self.format_sentences(&report.experience));
        output.push_str(&format!("Years of experience: {}\n", report.experience_years));

        output.push_str(&self.format_header("Skills", 2));
        for (category, skills) in report.skills.categories() {
            let listed = self.format_list(skills.iter().map(String::as_str));
            output.push_str(&format!(
                "{}: {}\n",
                self.colorize(&capitalize(category), Color::Cyan),
                listed
            ));
        }

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Suitability: {}/100 {}\n",
            report.score,
            self.format_score_badge(report.score)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &EvaluationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(
        &self,
        report: &EvaluationReport,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::contact::ContactInfo;
    use crate::processing::skills::SkillSet;

    fn sample_report() -> EvaluationReport {
        let mut skills = SkillSet::default();
        skills.insert("technical", "python");
        skills.insert("technical", "sql");

        EvaluationReport::assemble(
            ContactInfo {
                full_name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            },
            SectionMatches(vec!["BSc in Physics, 2012.".to_string()]),
            SectionMatches::default(),
            skills,
            3,
            15,
            ReportMetadata::new("rule-based").with_source("cv.pdf"),
        )
    }

    #[test]
    fn test_console_marks_missing_values() {
        let output = ConsoleFormatter::new(false).format_report(&sample_report()).unwrap();

        assert!(output.contains("Full name: Jane Doe"));
        assert!(output.contains("Address:   Not found"));
        assert!(output.contains("  • BSc in Physics, 2012."));
        assert!(output.contains("Technical: python, sql"));
        assert!(output.contains("Soft: N/A"));
        assert!(output.contains("Suitability: 15/100 [POOR]"));
        assert!(output.contains("Document: cv.pdf"));
    }

    #[test]
    fn test_console_empty_experience_is_na() {
        let output = ConsoleFormatter::new(false).format_report(&sample_report()).unwrap();
        let experience = output.split("Experience\n").nth(1).unwrap();
        assert!(experience.starts_with("  N/A\n"));
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        for pretty in [true, false] {
            let json = JsonFormatter::new(pretty).format_report(&report).unwrap();
            let parsed: EvaluationReport = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, report);
        }
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false);
        let report = sample_report();

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));

        let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
        assert!(console.contains("CV EVALUATION"));
    }
}
