//! CV evaluator: extract and score the contents of a resume

use clap::Parser;
use cv_evaluator::cli::Cli;
use cv_evaluator::input::InputManager;
use cv_evaluator::output::ReportGenerator;
use cv_evaluator::processing::{Evaluator, PatternRegistry};
use cv_evaluator::storage::ContactStore;
use cv_evaluator::{Config, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli).await {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            if e.is_startup_fatal() {
                error!("Failed to load configuration: {}", e);
            } else {
                error!("Evaluation failed: {}", e);
            }
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref())?;
    let patterns = PatternRegistry::from_config(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Reading {}", cli.document.display()));

    let input_manager = InputManager::new();
    let text = match input_manager.extract_text(&cli.document).await {
        Ok(text) => text,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message("Evaluating");
    let evaluator = Evaluator::new(&patterns);
    let mut report = evaluator.evaluate(&text);
    report.metadata.source = Some(cli.document.display().to_string());
    spinner.finish_and_clear();

    info!(
        "Evaluated {}: score {}/100",
        cli.document.display(),
        report.score
    );

    if !cli.no_save && config.storage.enabled {
        let store_path = cli.store.unwrap_or(config.storage.store_path);
        let store = ContactStore::new(store_path);
        let count = store.append(&report.contact_info)?;
        info!("Recorded contact #{} in {}", count, store.path().display());
    }

    let format = cli.output.unwrap_or(config.output.format);
    let use_colors = config.output.color_output && !cli.no_color;
    let generator = ReportGenerator::with_options(use_colors, config.output.pretty_json);
    generator.generate_report(&report, &format)
}
