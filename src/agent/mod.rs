//! Tool-augmented reasoning loop.
//!
//! One generic agent construction serves the ten research variants and the
//! writer: an instruction block, a bounded step loop, and two tools
//! (calculator, web search) the model may call along the way.

mod calculator;
mod runner;
mod tools;

pub use calculator::evaluate;
pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
