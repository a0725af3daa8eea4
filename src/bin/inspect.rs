//! cv-inspect: review one stored contact record

use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use cv_evaluator::processing::contact::ContactInfo;
use cv_evaluator::processing::linguistics::{LinguisticAnalyzer, RuleBasedAnalyzer};
use cv_evaluator::processing::PatternRegistry;
use cv_evaluator::storage::ContactStore;
use cv_evaluator::validation::{is_valid_email, is_valid_gender};
use cv_evaluator::{Config, CvEvaluatorError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-inspect")]
#[command(about = "Show a stored contact record with validity checks and linguistic analysis")]
struct Args {
    /// Zero-based position of the record in the store
    index: usize,

    /// Contact store path, overriding the configured one
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let patterns = PatternRegistry::from_config(&config).context("Invalid pattern configuration")?;

    let store = ContactStore::new(args.store.unwrap_or(config.storage.store_path));
    let records = store.load();
    if records.is_empty() {
        bail!("No records in {}", store.path().display());
    }

    let record = records.get(args.index).ok_or_else(|| {
        CvEvaluatorError::InvalidInput(format!(
            "Record index {} out of range ({} records in {})",
            args.index,
            records.len(),
            store.path().display()
        ))
    })?;

    print_record(args.index, record, &patterns);
    print_analysis(record, &RuleBasedAnalyzer::new());
    Ok(())
}

fn print_record(index: usize, record: &ContactInfo, patterns: &PatternRegistry) {
    println!("{}", format!("Record #{}", index).bold());

    for (label, value) in record.fields() {
        let flag = match (label, value) {
            ("Email", Some(email)) => Some(is_valid_email(patterns.email(), email)),
            ("Gender", Some(gender)) => Some(is_valid_gender(gender)),
            _ => None,
        };
        let flag = match flag {
            Some(true) => format!(" {}", "[valid]".green()),
            Some(false) => format!(" {}", "[invalid]".red()),
            None => String::new(),
        };
        println!("  {:<10} {}{}", format!("{}:", label), value.unwrap_or("Not found"), flag);
    }
}

fn print_analysis(record: &ContactInfo, analyzer: &dyn LinguisticAnalyzer) {
    let text = format!(
        "{}. {}. {}",
        record.full_name.as_deref().unwrap_or_default(),
        record.address.as_deref().unwrap_or_default(),
        record.email.as_deref().unwrap_or_default()
    );
    let analysis = analyzer.analyze(&text);

    println!("\n{}", "Tokens".bold());
    let tokens: Vec<&str> = analysis.tokens.iter().map(|t| t.text()).collect();
    println!("  {}", tokens.join(" | "));

    println!("\n{}", "Entities".bold());
    if analysis.entities.is_empty() {
        println!("  none");
    }
    for entity in &analysis.entities {
        println!("  {:<12} {}", entity.label.to_string(), entity.text());
    }
}
