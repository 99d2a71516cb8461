//! Classify command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::classify::Categorizer;
use crate::config::{Prompts, Settings};
use anyhow::Result;

/// Run the classify command.
pub async fn run_classify(question: &str, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Classify) {
        Output::error(&format!("{}", e));
        Output::info("Run 'arv doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let prompts = Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    )?;
    let categorizer = Categorizer::new(&settings, prompts);

    let spinner = Output::spinner("Classifying...");

    match categorizer.classify(question).await {
        Ok(outcome) => {
            spinner.finish_and_clear();
            println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Classification failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
