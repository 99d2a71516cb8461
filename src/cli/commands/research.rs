//! Research command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::classify::{Category, Classification, ClassifyOutcome, QuestionType};
use crate::config::Settings;
use crate::pipeline::Pipeline;
use anyhow::Result;

/// Run the research command.
///
/// With `--category` the categorizer is skipped and the named category's
/// template runs directly against the raw question.
pub async fn run_research(
    question: &str,
    category: Option<String>,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask) {
        Output::error(&format!("{}", e));
        Output::info("Run 'arv doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let pipeline = Pipeline::new(settings)?;

    let classification = match category {
        Some(label) => {
            let category: Category = label.parse()?;
            Classification {
                category,
                site: "Unknown".to_string(),
                intent: question.to_string(),
                question_type: QuestionType::Fact,
            }
        }
        None => {
            let spinner = Output::spinner("Classifying...");
            let outcome = pipeline.classify(question).await;
            spinner.finish_and_clear();
            match outcome? {
                ClassifyOutcome::Classified(c) => c,
                ClassifyOutcome::Unparsed {
                    error,
                    raw_response,
                } => {
                    Output::error(&format!("Classification failed: {}", error));
                    Output::kv("Raw response", &raw_response);
                    return Err(anyhow::anyhow!("unparseable categorizer output"));
                }
            }
        }
    };

    Output::info(&format!(
        "Researching as {} (site: {})",
        classification.category, classification.site
    ));

    let spinner = Output::spinner("Researching...");

    match pipeline.research(question, &classification).await {
        Ok(result) => {
            spinner.finish_and_clear();

            println!("\n{}\n", result.text);

            Output::kv(
                "Structured",
                if result.is_structured() { "yes" } else { "no (low confidence)" },
            );

            if !result.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", result.tool_calls.len()));
                for call in &result.tool_calls {
                    Output::tool_call(&call.name, &call.arguments);
                }
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Research failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
