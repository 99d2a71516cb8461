//! Tool definitions and implementations for the agent loop.

use super::calculator;
use crate::error::{ArvError, Result};
use crate::search::SearchProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Evaluate an arithmetic expression.
    Calculate { expression: String },

    /// Search the web for up-to-date information.
    WebSearch { query: String },
}

/// Tool execution context with access to the search provider.
#[derive(Clone)]
pub struct ToolContext {
    search: Arc<dyn SearchProvider>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            // Calculator failures are observations, not errors: the evaluator
            // folds them into its returned text.
            ToolCall::Calculate { expression } => Ok(calculator::evaluate(expression)),
            ToolCall::WebSearch { query } => self.search.search(query).await,
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "calculate".to_string(),
                description: Some(
                    "A simple calculator for basic math operations. \
                    Input should be an arithmetic expression like '2 + 2'."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "expression": {
                            "type": "string",
                            "description": "The arithmetic expression to evaluate"
                        }
                    },
                    "required": ["expression"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "web_search".to_string(),
                description: Some(
                    "Search the web for current, verifiable information. \
                    Input should be a search query like 'Taj Mahal opening hours'."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search query"
                        }
                    },
                    "required": ["query"]
                })),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| ArvError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "calculate" => {
            let expression = args["expression"]
                .as_str()
                .ok_or_else(|| ArvError::Agent("Missing 'expression' argument".to_string()))?
                .to_string();
            Ok(ToolCall::Calculate { expression })
        }
        "web_search" => {
            let query = args["query"]
                .as_str()
                .ok_or_else(|| ArvError::Agent("Missing 'query' argument".to_string()))?
                .to_string();
            Ok(ToolCall::WebSearch { query })
        }
        _ => Err(ArvError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubSearch;

    #[async_trait]
    impl SearchProvider for StubSearch {
        async fn search(&self, query: &str) -> Result<String> {
            Ok(format!("results for {}", query))
        }
    }

    #[test]
    fn test_parse_calculate_tool() {
        let tool = parse_tool_call("calculate", r#"{"expression": "2 + 2"}"#).unwrap();
        match tool {
            ToolCall::Calculate { expression } => assert_eq!(expression, "2 + 2"),
            _ => panic!("Expected Calculate tool"),
        }
    }

    #[test]
    fn test_parse_web_search_tool() {
        let tool = parse_tool_call("web_search", r#"{"query": "Angkor Wat"}"#).unwrap();
        match tool {
            ToolCall::WebSearch { query } => assert_eq!(query, "Angkor Wat"),
            _ => panic!("Expected WebSearch tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert!(parse_tool_call("teleport", "{}").is_err());
    }

    #[test]
    fn test_parse_missing_argument() {
        assert!(parse_tool_call("calculate", "{}").is_err());
    }

    #[tokio::test]
    async fn test_execute_calculate() {
        let context = ToolContext::new(Arc::new(StubSearch));
        let result = context
            .execute(&ToolCall::Calculate {
                expression: "2 + 2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result, "4");
    }

    #[tokio::test]
    async fn test_execute_calculate_bad_expression_is_text() {
        let context = ToolContext::new(Arc::new(StubSearch));
        let result = context
            .execute(&ToolCall::Calculate {
                expression: "2 +".to_string(),
            })
            .await
            .unwrap();
        assert!(result.starts_with("Calculation error:"));
    }

    #[tokio::test]
    async fn test_execute_web_search_uses_provider() {
        let context = ToolContext::new(Arc::new(StubSearch));
        let result = context
            .execute(&ToolCall::WebSearch {
                query: "Petra".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result, "results for Petra");
    }

    #[test]
    fn test_tool_definitions_cover_both_tools() {
        let defs = tool_definitions();
        let names: Vec<_> = defs.iter().map(|d| d.function.name.as_str()).collect();
        assert_eq!(names, vec!["calculate", "web_search"]);
    }
}
