//! Location Summarizer.

use std::sync::Arc;

use lore_core::{GenerationConfig, LocationQuery, LocationSummary};
use lore_error::LoreResult;
use lore_interface::LoreDriver;
use tracing::{debug, instrument};

use crate::{invoke_structured, summary_prompt};

/// Produces the short factual summary stored alongside a saved location.
#[derive(Clone)]
pub struct LocationSummarizer {
    driver: Arc<dyn LoreDriver>,
    config: GenerationConfig,
}

impl std::fmt::Debug for LocationSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationSummarizer")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}

impl LocationSummarizer {
    /// Create a summarizer over `driver`.
    pub fn new(driver: Arc<dyn LoreDriver>, config: GenerationConfig) -> Self {
        Self { driver, config }
    }

    /// Summarize `location` for a visitor.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`](lore_error::GenerationError) on any
    /// failure, including an empty summary.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn summarize(&self, location: &LocationQuery) -> LoreResult<String> {
        let prompt = summary_prompt(location.as_str());
        let LocationSummary { summary } = invoke_structured(
            self.driver.as_ref(),
            &prompt,
            &LocationSummary::shape(),
            &self.config,
        )
        .await?;

        debug!(summary_len = summary.len(), "Summary generated");
        Ok(summary)
    }
}
