//! Arv - Heritage Site Guide
//!
//! An AI tour-guide CLI that answers free-text questions about world
//! heritage sites.
//!
//! The name "Arv" comes from the Norwegian word for "heritage."
//!
//! # Overview
//!
//! Arv resolves each question in one pass:
//! - Classify the question into one of ten topic categories
//! - Dispatch to that category's research instructions
//! - Gather facts through a tool-augmented agent loop (calculator, web search)
//! - Write the findings up as a short, publishable passage
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration and prompt templates
//! - `classify` - Question categorization and the closed category vocabulary
//! - `agent` - The tool-augmented reasoning loop and its two tools
//! - `search` - Web search provider boundary
//! - `research` - Category-specific research step
//! - `writer` - Final prose generation
//! - `pipeline` - End-to-end request coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use arv::config::Settings;
//! use arv::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(settings)?;
//!
//!     let response = pipeline.answer("Tell me about the Taj Mahal.").await?;
//!     println!("{}", response.article.body);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod pipeline;
pub mod research;
pub mod search;
pub mod writer;

pub use error::{ArvError, Result};
