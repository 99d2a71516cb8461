//! Final prose generation from research output.

use crate::agent::{Agent, ToolContext};
use crate::classify::{Category, Classification};
use crate::config::{Prompts, Settings};
use crate::error::{ArvError, Result};
use crate::research::ResearchResult;
use std::collections::HashMap;
use tracing::{info, instrument};

/// A rendered passage ready for display.
#[derive(Debug, Clone)]
pub struct Article {
    /// The prose body.
    pub body: String,
    /// Category the passage was written for.
    pub category: Category,
}

/// Writer that turns research text into a short passage.
///
/// Runs the same agent construction as the researchers; the tools are
/// available but rarely needed for this transformation step.
pub struct Writer {
    agent: Agent,
    prompts: Prompts,
}

impl Writer {
    /// Create a new writer.
    pub fn new(prompts: Prompts, tools: ToolContext, settings: &Settings) -> Self {
        let agent = Agent::new(tools, &settings.model.chat_model, settings.agent.max_steps);
        Self { agent, prompts }
    }

    /// Write a passage from a research result.
    #[instrument(skip(self, research, classification), fields(category = %research.category))]
    pub async fn write(
        &self,
        research: &ResearchResult,
        classification: &Classification,
    ) -> Result<Article> {
        let mut vars = HashMap::new();
        vars.insert("research".to_string(), research.text.clone());
        vars.insert("category".to_string(), research.category.to_string());
        vars.insert("site".to_string(), classification.site.clone());

        let instructions = self
            .prompts
            .render_with_custom(&self.prompts.writer.instructions, &vars);

        info!("Writing passage for {}", research.category);

        let response = self.agent.run(&instructions).await?;

        if response.content.trim().is_empty() {
            return Err(ArvError::Writer("Empty passage from model".to_string()));
        }

        Ok(Article {
            body: response.content,
            category: research.category,
        })
    }
}
