//! Category-specific research over the tool-augmented agent loop.
//!
//! Each category owns an instruction template describing its target JSON
//! schema; the agent fills it using web search and the calculator. The reply
//! is treated as text first, with a defensive JSON extraction layered on top.

use crate::agent::{Agent, ToolCallRecord, ToolContext};
use crate::classify::{Category, Classification};
use crate::config::{Prompts, ResearchPrompts, Settings};
use crate::error::Result;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// Result of a research step.
#[derive(Debug)]
pub struct ResearchResult {
    /// Category the research was scoped to.
    pub category: Category,
    /// Raw text the agent settled on.
    pub text: String,
    /// Parsed JSON payload, when the model honored the schema.
    pub data: Option<serde_json::Value>,
    /// Tool calls the agent made along the way.
    pub tool_calls: Vec<ToolCallRecord>,
}

impl ResearchResult {
    /// Whether the reply parsed against the category schema.
    ///
    /// A `false` here marks a low-confidence extraction; the raw text is
    /// still usable downstream.
    pub fn is_structured(&self) -> bool {
        self.data.is_some()
    }
}

/// Select the instruction template for a category.
pub fn template_for(prompts: &ResearchPrompts, category: Category) -> &str {
    match category {
        Category::GeneralInformation => &prompts.general,
        Category::LocationAccessibility => &prompts.location,
        Category::VisitingHours => &prompts.hours,
        Category::TicketsPricing => &prompts.tickets,
        Category::HistoricalInsights => &prompts.history,
        Category::VisitorTips => &prompts.tips,
        Category::Facilities => &prompts.facilities,
        Category::CustomExperience => &prompts.experience,
        Category::Comparison => &prompts.comparison,
        Category::LanguageCulture => &prompts.language,
    }
}

/// Research step for a single category.
pub struct Researcher {
    agent: Agent,
    category: Category,
    prompts: Prompts,
}

impl Researcher {
    /// Create a researcher for the given category.
    pub fn new(
        category: Category,
        prompts: Prompts,
        tools: ToolContext,
        settings: &Settings,
    ) -> Self {
        let agent = Agent::new(tools, &settings.model.chat_model, settings.agent.max_steps);
        Self {
            agent,
            category,
            prompts,
        }
    }

    /// Run the research step for a classified question.
    #[instrument(skip(self, classification), fields(category = %self.category))]
    pub async fn research(
        &self,
        query: &str,
        classification: &Classification,
    ) -> Result<ResearchResult> {
        let mut vars = HashMap::new();
        vars.insert("query".to_string(), query.to_string());
        vars.insert("site".to_string(), classification.site.clone());
        vars.insert("category".to_string(), self.category.to_string());

        let template = template_for(&self.prompts.research, self.category);
        let instructions = self.prompts.render_with_custom(template, &vars);

        info!("Researching '{}' for {}", classification.site, self.category);

        let response = self.agent.run(&instructions).await?;

        if response.content.trim().is_empty() {
            return Err(crate::error::ArvError::Research(
                "Empty research result from model".to_string(),
            ));
        }

        let data = extract_json(&response.content);
        if data.is_none() {
            warn!(
                "Research reply for {} did not parse as JSON; keeping raw text",
                self.category
            );
        }

        Ok(ResearchResult {
            category: self.category,
            text: response.content,
            data,
            tool_calls: response.tool_calls,
        })
    }
}

/// Defensively extract a JSON object from a model reply.
///
/// Tries the fence-stripped reply first, then the widest brace-delimited
/// window. Returns None when neither parses.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    let cleaned = crate::classify::strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&cleaned) {
        if value.is_object() {
            return Some(value);
        }
    }

    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&cleaned[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResearchPrompts;

    #[test]
    fn test_template_exists_for_every_category() {
        let prompts = ResearchPrompts::default();
        for category in Category::ALL {
            let template = template_for(&prompts, category);
            assert!(
                !template.is_empty(),
                "empty template for {}",
                category
            );
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let prompts = ResearchPrompts::default();
        let unique: std::collections::HashSet<_> = Category::ALL
            .iter()
            .map(|c| template_for(&prompts, *c))
            .collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_extract_json_plain_object() {
        let value = extract_json(r#"{"site": "Petra"}"#).unwrap();
        assert_eq!(value["site"], "Petra");
    }

    #[test]
    fn test_extract_json_fenced_object() {
        let value = extract_json("```json\n{\"site\": \"Petra\"}\n```").unwrap();
        assert_eq!(value["site"], "Petra");
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let value =
            extract_json("Here is what I found: {\"site\": \"Hampi\"} Hope that helps.").unwrap();
        assert_eq!(value["site"], "Hampi");
    }

    #[test]
    fn test_extract_json_prose_only() {
        assert!(extract_json("The Louvre opens at nine.").is_none());
    }

    #[test]
    fn test_extract_json_rejects_bare_array() {
        assert!(extract_json("[1, 2, 3]").is_none());
    }
}
