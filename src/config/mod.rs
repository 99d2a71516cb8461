//! Configuration module for Arv.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{CategorizerPrompts, Prompts, ResearchPrompts, WriterPrompts};
pub use settings::{
    AgentSettings, GeneralSettings, ModelSettings, PromptSettings, SearchSettings, Settings,
};
