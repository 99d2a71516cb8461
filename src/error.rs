//! Error types for Arv.

use thiserror::Error;

/// Library-level error type for Arv operations.
#[derive(Error, Debug)]
pub enum ArvError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Categorizer returned unparseable output: {0}")]
    Categorizer(String),

    #[error("Unrecognized category: {0}")]
    UnknownCategory(String),

    #[error("Unrecognized question type: {0}")]
    UnknownQuestionType(String),

    #[error("Research failed: {0}")]
    Research(String),

    #[error("Writer failed: {0}")]
    Writer(String),

    #[error("Web search failed: {0}")]
    Search(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Arv operations.
pub type Result<T> = std::result::Result<T, ArvError>;
