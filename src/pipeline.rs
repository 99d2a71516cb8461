//! Request pipeline for Arv.
//!
//! One user interaction flows classify -> dispatch -> research -> write, with
//! no branching back; each stage's output feeds the next exactly once.

use crate::classify::{Categorizer, Classification, ClassifyOutcome};
use crate::config::{Prompts, Settings};
use crate::error::{ArvError, Result};
use crate::research::{ResearchResult, Researcher};
use crate::search::{SearchProvider, SerpApiClient};
use crate::agent::ToolContext;
use crate::writer::{Article, Writer};
use std::sync::Arc;
use tracing::{info, instrument};

/// The full categorize-dispatch-compose pipeline.
pub struct Pipeline {
    settings: Settings,
    prompts: Prompts,
    categorizer: Categorizer,
    tools: ToolContext,
}

impl Pipeline {
    /// Create a pipeline with the SerpAPI search provider.
    pub fn new(settings: Settings) -> Result<Self> {
        let search = Arc::new(SerpApiClient::from_env(&settings.search));
        Self::with_search_provider(settings, search)
    }

    /// Create a pipeline with a custom search provider.
    pub fn with_search_provider(
        settings: Settings,
        search: Arc<dyn SearchProvider>,
    ) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;
        let categorizer = Categorizer::new(&settings, prompts.clone());
        let tools = ToolContext::new(search);

        Ok(Self {
            settings,
            prompts,
            categorizer,
            tools,
        })
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run only the categorization stage.
    pub async fn classify(&self, query: &str) -> Result<ClassifyOutcome> {
        self.categorizer.classify(query).await
    }

    /// Run only the research stage for an already-classified question.
    pub async fn research(
        &self,
        query: &str,
        classification: &Classification,
    ) -> Result<ResearchResult> {
        let researcher = Researcher::new(
            classification.category,
            self.prompts.clone(),
            self.tools.clone(),
            &self.settings,
        );
        researcher.research(query, classification).await
    }

    /// Resolve one interaction end to end.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn answer(&self, query: &str) -> Result<PipelineResponse> {
        info!("Classifying question");
        let classification = match self.categorizer.classify(query).await? {
            ClassifyOutcome::Classified(c) => c,
            ClassifyOutcome::Unparsed {
                error,
                raw_response,
            } => {
                // Without a category there is nothing to dispatch to; surface
                // the fallback mapping instead of guessing.
                return Err(ArvError::Categorizer(format!(
                    "{} (raw response: {})",
                    error, raw_response
                )));
            }
        };

        info!(
            "Dispatching to {} researcher (site: {})",
            classification.category, classification.site
        );
        let research = self.research(query, &classification).await?;

        info!("Writing passage");
        let writer = Writer::new(self.prompts.clone(), self.tools.clone(), &self.settings);
        let article = writer.write(&research, &classification).await?;

        Ok(PipelineResponse {
            classification,
            research,
            article,
        })
    }
}

/// Everything produced during one interaction.
#[derive(Debug)]
pub struct PipelineResponse {
    /// The categorizer's structured output.
    pub classification: Classification,
    /// The research step's output.
    pub research: ResearchResult,
    /// The rendered passage.
    pub article: Article,
}
