//! CLI module for Arv.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Arv - Heritage Site Guide
///
/// An AI tour-guide CLI that answers questions about world heritage sites.
/// The name "Arv" comes from the Norwegian word for "heritage."
#[derive(Parser, Debug)]
#[command(name = "arv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Arv and verify configuration
    Init,

    /// Check API keys and configuration
    Doctor,

    /// Ask a question about a heritage site and get a written answer
    Ask {
        /// The question to ask
        question: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Maximum reasoning steps for the research agent
        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Categorize a question without researching it
    Classify {
        /// The question to categorize
        question: String,
    },

    /// Run the research step only and print the raw result
    Research {
        /// The question to research
        question: String,

        /// Force a category instead of classifying (e.g. "Tickets & Pricing")
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Start an interactive question-and-answer session
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show example questions, one per category
    Examples,

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
