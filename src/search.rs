//! Web search provider boundary.
//!
//! The agent loop only sees free text in and free text out; the provider
//! behind that contract is SerpAPI in production and a stub in tests.

use crate::config::SearchSettings;
use crate::error::{ArvError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// A web search capability: query text in, result payload text out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String>;
}

/// SerpAPI-backed search provider.
pub struct SerpApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_results: usize,
}

impl SerpApiClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: &str, settings: &SearchSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: api_key.to_string(),
            max_results: settings.max_results,
        }
    }

    /// Create a client from the `SERPAPI_API_KEY` environment variable.
    ///
    /// A missing key is not an error here; the first search call will fail
    /// with the provider's own rejection instead.
    pub fn from_env(settings: &SearchSettings) -> Self {
        let api_key = std::env::var("SERPAPI_API_KEY").unwrap_or_default();
        Self::new(&api_key, settings)
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ArvError::Search(format!(
                "SerpAPI error ({}): {}",
                status, body
            )));
        }

        let payload: SerpResponse = response.json().await?;
        Ok(format_results(query, &payload, self.max_results))
    }
}

/// Subset of the SerpAPI response we surface to the agent.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SerpResponse {
    #[serde(default)]
    answer_box: Option<AnswerBox>,
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct AnswerBox {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

/// Format a provider payload as a tool observation.
fn format_results(query: &str, payload: &SerpResponse, max_results: usize) -> String {
    let mut output = String::new();

    if let Some(answer_box) = &payload.answer_box {
        if let Some(answer) = answer_box.answer.as_ref().or(answer_box.snippet.as_ref()) {
            output.push_str(&format!("Answer: {}\n\n", answer));
        }
    }

    let results: Vec<_> = payload.organic_results.iter().take(max_results).collect();

    if results.is_empty() && output.is_empty() {
        return format!("No results found for: {}", query);
    }

    for (i, result) in results.iter().enumerate() {
        output.push_str(&format!("{}. {}\n   {}\n", i + 1, result.title, result.link));
        if let Some(snippet) = &result.snippet {
            output.push_str(&format!("   {}\n", snippet));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> SerpResponse {
        serde_json::from_str(
            r#"{
                "answer_box": { "answer": "1648" },
                "organic_results": [
                    { "title": "Taj Mahal - UNESCO", "link": "https://whc.unesco.org/en/list/252", "snippet": "An immense mausoleum of white marble." },
                    { "title": "Official site", "link": "https://www.tajmahal.gov.in" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_results_includes_answer_and_sources() {
        let formatted = format_results("taj mahal completion year", &sample_payload(), 5);
        assert!(formatted.starts_with("Answer: 1648"));
        assert!(formatted.contains("Taj Mahal - UNESCO"));
        assert!(formatted.contains("https://www.tajmahal.gov.in"));
    }

    #[test]
    fn test_format_results_respects_limit() {
        let formatted = format_results("q", &sample_payload(), 1);
        assert!(formatted.contains("Taj Mahal - UNESCO"));
        assert!(!formatted.contains("Official site"));
    }

    #[test]
    fn test_format_results_empty_payload() {
        let payload = SerpResponse::default();
        let formatted = format_results("obscure query", &payload, 5);
        assert_eq!(formatted, "No results found for: obscure query");
    }
}
