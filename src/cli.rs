//! CLI interface for the CV evaluator

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-evaluator")]
#[command(
    about = "Extract contact details, education, experience and skills from a CV and score it"
)]
#[command(long_about = "Evaluate a PDF or DOCX resume: extract contact details, \
education and experience sentences, skills and years of experience, compute a 0-100 \
suitability score and record the contact details in a local store")]
pub struct Cli {
    /// Path to the resume (PDF or DOCX)
    pub document: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Contact store path, overriding the configured one
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Output format: console, json
    #[arg(short, long, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Do not record the extracted contact details
    #[arg(long)]
    pub no_save: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["cv-evaluator", "resume.pdf"]).unwrap();
        assert_eq!(cli.document, PathBuf::from("resume.pdf"));
        assert!(cli.output.is_none());
        assert!(!cli.no_save);

        assert!(Cli::try_parse_from(["cv-evaluator"]).is_err());
        assert!(Cli::try_parse_from(["cv-evaluator", "a.pdf", "b.pdf"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "cv-evaluator",
            "-v",
            "--output",
            "JSON",
            "--store",
            "/tmp/people.json",
            "--no-save",
            "cv.docx",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/people.json")));
        assert!(cli.no_save);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }
}
