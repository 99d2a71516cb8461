//! Generic instruction-driven agent with a tool calling loop.
//!
//! Every research variant and the writer run through this one construction;
//! only the instruction text differs.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::error::{ArvError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use tracing::{debug, info};

/// Default system prompt for the agent.
const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a careful research assistant for heritage-site information.

You have two tools available:
- 'calculate' evaluates arithmetic expressions (currency conversions, distances, totals)
- 'web_search' retrieves current information from the web

Think step-by-step about what information you need. Use 'web_search' to verify facts
rather than relying on memory, and 'calculate' whenever arithmetic is involved.

When you have gathered enough information, produce the final answer exactly in the
format the instructions request, with no extra commentary."#;

/// Agent that follows an instruction block, optionally calling tools.
pub struct Agent {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    max_steps: usize,
    system_prompt: String,
}

impl Agent {
    /// Create a new agent with the given tool context and model.
    pub fn new(tools: ToolContext, model: &str, max_steps: usize) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            tools,
            max_steps,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Set a custom system prompt.
    pub fn with_system_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = prompt.to_string();
        self
    }

    /// Run the agent with an instruction block.
    pub async fn run(&self, instructions: &str) -> Result<AgentResponse> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()
                .map_err(|e| ArvError::Agent(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(instructions.to_string())
                .build()
                .map_err(|e| ArvError::Agent(e.to_string()))?
                .into(),
        ];

        let mut steps = 0;
        let mut tool_calls_made = Vec::new();

        loop {
            steps += 1;
            if steps > self.max_steps {
                return Err(ArvError::Agent(format!(
                    "Agent exceeded maximum steps ({})",
                    self.max_steps
                )));
            }

            debug!("Agent step {}", steps);

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| ArvError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| ArvError::OpenAI(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| ArvError::Agent("No response from model".to_string()))?;

            // Check if the model wants to call tools
            if let Some(ref tool_calls) = choice.message.tool_calls {
                if tool_calls.is_empty() {
                    return build_response(&choice.message.content, tool_calls_made, steps);
                }

                // Add assistant message with tool calls to history
                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| ArvError::Agent(e.to_string()))?;
                messages.push(assistant_msg.into());

                // Execute each tool call
                for tool_call in tool_calls {
                    let record = self.execute_tool_call(tool_call).await;

                    let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(record.result.clone())
                        .build()
                        .map_err(|e| ArvError::Agent(e.to_string()))?;
                    messages.push(tool_msg.into());

                    tool_calls_made.push(record);
                }
            } else {
                // No tool calls, the model is done
                return build_response(&choice.message.content, tool_calls_made, steps);
            }
        }
    }

    /// Execute a single tool call and return a record of it.
    ///
    /// Parse and execution failures become observation text, so the loop
    /// continues reasoning instead of aborting the interaction.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> ToolCallRecord {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        let result = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => output,
                Err(e) => format!("Tool error: {}", e),
            },
            Err(e) => format!("Failed to parse tool call: {}", e),
        };

        ToolCallRecord {
            name: name.clone(),
            arguments: arguments.clone(),
            result,
        }
    }
}

/// Build the final agent response.
fn build_response(
    content: &Option<String>,
    tool_calls: Vec<ToolCallRecord>,
    steps: usize,
) -> Result<AgentResponse> {
    Ok(AgentResponse {
        content: content.clone().unwrap_or_default(),
        tool_calls,
        steps,
    })
}

/// Response from an agent run.
#[derive(Debug)]
pub struct AgentResponse {
    /// The final response content from the agent.
    pub content: String,
    /// Record of all tool calls made during execution.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of reasoning steps (LLM calls) used.
    pub steps: usize,
}

/// Record of a tool call made by the agent.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    /// Name of the tool called.
    pub name: String,
    /// JSON arguments passed to the tool.
    pub arguments: String,
    /// Result returned by the tool.
    pub result: String,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_call_record_display() {
        let record = ToolCallRecord {
            name: "web_search".to_string(),
            arguments: r#"{"query": "Hampi"}"#.to_string(),
            result: "Found results".to_string(),
        };
        assert_eq!(format!("{}", record), r#"web_search({"query": "Hampi"})"#);
    }

    #[test]
    fn test_build_response_defaults_empty_content() {
        let response = build_response(&None, Vec::new(), 1).unwrap();
        assert_eq!(response.content, "");
        assert_eq!(response.steps, 1);
    }
}
