//! Ask command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    model: Option<String>,
    max_steps: Option<usize>,
    mut settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask) {
        Output::error(&format!("{}", e));
        Output::info("Run 'arv doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    if let Some(model) = model {
        settings.model.chat_model = model;
    }
    if let Some(max_steps) = max_steps {
        settings.agent.max_steps = max_steps;
    }

    let pipeline = Pipeline::new(settings)?;

    let spinner = Output::spinner("Consulting the tour guide...");

    match pipeline.answer(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.article.body);

            Output::header("Classification");
            Output::kv("Category", response.classification.category.label());
            Output::kv("Site", &response.classification.site);
            Output::kv("Intent", &response.classification.intent);
            Output::kv(
                "Question type",
                &response.classification.question_type.to_string(),
            );

            if !response.research.tool_calls.is_empty() {
                Output::header(&format!(
                    "Tool calls ({})",
                    response.research.tool_calls.len()
                ));
                for call in &response.research.tool_calls {
                    Output::tool_call(&call.name, &call.arguments);
                }
            }

            if !response.research.is_structured() {
                Output::warning("Research output did not match the category schema (low confidence).");
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to answer question: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
