//! Question categorization via a single LLM call.

use super::{Category, QuestionType};
use crate::config::{Prompts, Settings};
use crate::error::{ArvError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Structured metadata extracted from a user question.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub category: Category,
    pub site: String,
    pub intent: String,
    pub question_type: QuestionType,
}

/// Raw reply shape before the closed vocabularies are applied.
#[derive(Debug, Deserialize)]
struct RawClassification {
    category: String,
    site: String,
    intent: String,
    question_type: String,
}

/// Outcome of a categorization call.
///
/// `Unparsed` is the local fallback for a reply that is not valid JSON for
/// the expected shape; it carries the raw reply so callers can inspect it.
#[derive(Debug, Clone)]
pub enum ClassifyOutcome {
    Classified(Classification),
    Unparsed { error: String, raw_response: String },
}

impl ClassifyOutcome {
    /// Render the outcome as the wire mapping: either the four classification
    /// keys, or `{error, raw_response}`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ClassifyOutcome::Classified(c) => serde_json::json!({
                "category": c.category,
                "site": c.site,
                "intent": c.intent,
                "question_type": c.question_type,
            }),
            ClassifyOutcome::Unparsed {
                error,
                raw_response,
            } => serde_json::json!({
                "error": error,
                "raw_response": raw_response,
            }),
        }
    }
}

/// Categorizer for heritage-site questions.
pub struct Categorizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: f32,
    prompts: Prompts,
}

impl Categorizer {
    /// Create a new categorizer from settings and prompts.
    pub fn new(settings: &Settings, prompts: Prompts) -> Self {
        Self {
            client: create_client(),
            model: settings.model.chat_model.clone(),
            temperature: settings.model.temperature,
            prompts,
        }
    }

    /// Classify a question into a `Classification`, or the unparsed fallback.
    ///
    /// An out-of-range category after a successful JSON parse is returned as
    /// `ArvError::UnknownCategory`: the category drives dispatch, so it must
    /// surface explicitly rather than hide inside the fallback mapping.
    pub async fn classify(&self, query: &str) -> Result<ClassifyOutcome> {
        let mut vars = HashMap::new();
        vars.insert("query".to_string(), query.to_string());
        let prompt = self
            .prompts
            .render_with_custom(&self.prompts.categorizer.instructions, &vars);

        debug!("Categorizing query: {}", query);

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| ArvError::Categorizer(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| ArvError::Categorizer(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| ArvError::OpenAI(format!("Categorizer API error: {}", e)))?;

        let reply = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| ArvError::Categorizer("Empty response from model".to_string()))?
            .trim()
            .to_string();

        parse_classification(&reply)
    }
}

/// Strip surrounding markdown code-fence markers from a model reply.
pub fn strip_code_fences(reply: &str) -> String {
    static FENCE_RE: OnceLock<Regex> = OnceLock::new();
    let re = FENCE_RE.get_or_init(|| {
        Regex::new(r"^```(?:json)?|```$").expect("fence pattern compiles")
    });
    re.replace_all(reply.trim(), "").trim().to_string()
}

/// Parse a model reply into a classification outcome.
fn parse_classification(reply: &str) -> Result<ClassifyOutcome> {
    let cleaned = strip_code_fences(reply);

    let raw: RawClassification = match serde_json::from_str(&cleaned) {
        Ok(raw) => raw,
        Err(e) => {
            info!("Categorizer reply was not valid JSON: {}", e);
            return Ok(ClassifyOutcome::Unparsed {
                error: format!("Invalid JSON format returned: {}", e),
                raw_response: reply.to_string(),
            });
        }
    };

    // Category is load-bearing for dispatch; an unknown label is a hard error.
    let category: Category = raw.category.parse()?;

    // Question type is informational; an off-vocabulary value is the same
    // contract breach as malformed JSON and takes the same fallback.
    let question_type: QuestionType = match raw.question_type.parse() {
        Ok(qt) => qt,
        Err(_) => {
            return Ok(ClassifyOutcome::Unparsed {
                error: format!("Unrecognized question type: {}", raw.question_type),
                raw_response: reply.to_string(),
            });
        }
    };

    Ok(ClassifyOutcome::Classified(Classification {
        category,
        site: raw.site,
        intent: raw.intent,
        question_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r#"{
        "category": "General Information",
        "site": "Taj Mahal",
        "intent": "learn about the site",
        "question_type": "fact"
    }"#;

    #[test]
    fn test_parse_valid_reply() {
        let outcome = parse_classification(VALID_REPLY).unwrap();
        match outcome {
            ClassifyOutcome::Classified(c) => {
                assert_eq!(c.category, Category::GeneralInformation);
                assert_eq!(c.site, "Taj Mahal");
                assert_eq!(c.question_type, QuestionType::Fact);
            }
            other => panic!("expected Classified, got {:?}", other),
        }
    }

    #[test]
    fn test_fenced_reply_parses_like_unfenced() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);
        let from_fenced = parse_classification(&fenced).unwrap();
        let from_plain = parse_classification(VALID_REPLY).unwrap();
        assert_eq!(from_fenced.to_json(), from_plain.to_json());
    }

    #[test]
    fn test_non_json_reply_yields_fallback() {
        let outcome = parse_classification("I think this is about tickets.").unwrap();
        match outcome {
            ClassifyOutcome::Unparsed {
                error,
                raw_response,
            } => {
                assert!(!error.is_empty());
                assert_eq!(raw_response, "I think this is about tickets.");
            }
            other => panic!("expected Unparsed, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_is_a_hard_error() {
        let reply = r#"{
            "category": "Weather Forecast",
            "site": "Unknown",
            "intent": "n/a",
            "question_type": "fact"
        }"#;
        let result = parse_classification(reply);
        assert!(matches!(result, Err(ArvError::UnknownCategory(_))));
    }

    #[test]
    fn test_unknown_question_type_yields_fallback() {
        let reply = r#"{
            "category": "General Information",
            "site": "Petra",
            "intent": "overview",
            "question_type": "rant"
        }"#;
        let outcome = parse_classification(reply).unwrap();
        assert!(matches!(outcome, ClassifyOutcome::Unparsed { .. }));
    }

    #[test]
    fn test_outcome_json_has_expected_keys() {
        let classified = parse_classification(VALID_REPLY).unwrap().to_json();
        let keys: Vec<_> = classified.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        for key in ["category", "site", "intent", "question_type"] {
            assert!(classified.get(key).is_some());
        }

        let fallback = parse_classification("nope").unwrap().to_json();
        assert!(fallback.get("error").is_some());
        assert!(fallback.get("raw_response").is_some());
    }

    #[test]
    fn test_empty_reply_yields_fallback_not_panic() {
        let outcome = parse_classification("").unwrap();
        assert!(matches!(outcome, ClassifyOutcome::Unparsed { .. }));
    }

    #[test]
    fn test_empty_query_renders_a_prompt() {
        use crate::config::Prompts;
        let prompts = Prompts::default();
        let mut vars = std::collections::HashMap::new();
        vars.insert("query".to_string(), String::new());
        let prompt = Prompts::render(&prompts.categorizer.instructions, &vars);
        assert!(!prompt.contains("{{query}}"));
        assert!(prompt.contains("categorize the following question"));
    }

    #[test]
    fn test_strip_code_fences_variants() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }
}
