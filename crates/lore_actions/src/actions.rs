//! The generate-story and save-location actions.

use lore_core::{LocationQuery, SavedLocation, Story};
use lore_database::LocationStore;
use lore_error::{LoreError, LoreErrorKind};
use lore_flows::{LocationSummarizer, StoryGenerator};
use tracing::{error, info, instrument};

use crate::outcome::messages;
use crate::{ActionOutcome, FailureKind};

/// The orchestration layer shared by every presentation.
///
/// Each action validates its input, calls the flows and the store in
/// sequence, and converts any error into an [`ActionOutcome`] with a fixed
/// user message. Nothing is retried at this layer.
#[derive(Debug, Clone)]
pub struct Actions {
    stories: StoryGenerator,
    summarizer: LocationSummarizer,
    store: LocationStore,
}

impl Actions {
    /// Wire the actions to their collaborators.
    pub fn new(stories: StoryGenerator, summarizer: LocationSummarizer, store: LocationStore) -> Self {
        Self {
            stories,
            summarizer,
            store,
        }
    }

    /// The location store.
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Generate a story for `location_text`.
    ///
    /// Empty input fails with [`FailureKind::Validation`] and makes no
    /// generation call.
    #[instrument(skip(self))]
    pub async fn generate_story(&self, location_text: &str) -> ActionOutcome<Story> {
        let Ok(location) = LocationQuery::new(location_text) else {
            return ActionOutcome::failure(FailureKind::Validation, messages::EMPTY_LOCATION);
        };

        match self.stories.generate(&location).await {
            Ok(story) => ActionOutcome::Success(story),
            Err(e) => {
                error!(error = %e, "Story generation failed");
                ActionOutcome::failure(FailureKind::Generation, messages::GENERATION_FAILED)
            }
        }
    }

    /// Summarize `location_text` and persist it.
    ///
    /// Empty input fails with [`FailureKind::Validation`]. A summarizer
    /// failure is [`FailureKind::Generation`], a store failure
    /// [`FailureKind::StoreUnavailable`]; both carry the same save message.
    /// Callers holding a cached list should reload it after a success.
    #[instrument(skip(self))]
    pub async fn save_location(&self, location_text: &str) -> ActionOutcome<SavedLocation> {
        let Ok(location) = LocationQuery::new(location_text) else {
            return ActionOutcome::failure(FailureKind::Validation, messages::INVALID_SAVE);
        };

        let summary = match self.summarizer.summarize(&location).await {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "Location summary failed");
                return ActionOutcome::failure(failure_kind(&e), messages::SAVE_FAILED);
            }
        };

        match self.store.add(location.as_str(), &summary).await {
            Ok(saved) => {
                info!(id = %saved.id, "Location saved");
                ActionOutcome::Success(saved)
            }
            Err(e) => {
                error!(error = %e, "Location store write failed");
                ActionOutcome::failure(failure_kind(&e), messages::SAVE_FAILED)
            }
        }
    }

    /// All saved locations, most recent first; empty if the store is unavailable.
    pub async fn list_locations(&self) -> Vec<SavedLocation> {
        self.store.list().await
    }
}

/// Failure category for an error raised inside an action.
fn failure_kind(err: &LoreError) -> FailureKind {
    match err.kind() {
        LoreErrorKind::Validation(_) => FailureKind::Validation,
        LoreErrorKind::Store(_) => FailureKind::StoreUnavailable,
        _ => FailureKind::Generation,
    }
}
