//! Pre-flight checks before expensive operations.
//!
//! Validates that required credentials are configured before starting
//! operations that would otherwise fail midway through a paid API call.

use crate::error::{ArvError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Full pipeline: model key required, search key recommended.
    Ask,
    /// Categorization only: model key required.
    Classify,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all hard requirements pass, or an error describing
/// what's missing. A missing search key is only a warning: the agent can
/// still answer from the model alone, and the tool call fails visibly if
/// the model reaches for it.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Ask => {
            check_openai_key()?;
            if !has_search_key() {
                crate::cli::Output::warning(
                    "SERPAPI_API_KEY not set; web search tool calls will fail.",
                );
            }
        }
        Operation::Classify => {
            check_openai_key()?;
        }
    }
    Ok(())
}

/// Check if the OpenAI API key is configured.
fn check_openai_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(ArvError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(ArvError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

/// Check if the search provider key is configured.
fn has_search_key() -> bool {
    std::env::var("SERPAPI_API_KEY").is_ok_and(|key| !key.is_empty())
}
