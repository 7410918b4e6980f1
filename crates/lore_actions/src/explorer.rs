//! The explorer session.

use lore_core::{Coordinates, SavedLocation, Story};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::outcome::messages;
use crate::{ActionOutcome, Actions, FailureKind, Slot};

/// Result of a successful save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveResult {
    /// A new record was written
    Saved(SavedLocation),
    /// A record with the same name was already in the loaded list; nothing was written
    AlreadySaved(SavedLocation),
}

impl SaveResult {
    /// The record, new or existing.
    pub fn location(&self) -> &SavedLocation {
        match self {
            Self::Saved(location) | Self::AlreadySaved(location) => location,
        }
    }
}

/// Session state shared by every presentation.
///
/// Holds the loaded list of saved locations, the location most recently
/// asked about and the story generated for it. At most one generation and
/// one save are in flight at a time; a second request while one is running
/// fails with [`FailureKind::Busy`].
///
/// # Example
///
/// ```no_run
/// use lore_actions::{Actions, Explorer};
///
/// # async fn run(actions: Actions) {
/// let explorer = Explorer::new(actions);
/// explorer.load().await;
/// let outcome = explorer.generate("Eiffel Tower, Paris").await;
/// if outcome.is_success() {
///     explorer.save_current().await;
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct Explorer {
    actions: Actions,
    saved: RwLock<Vec<SavedLocation>>,
    current_location: RwLock<Option<String>>,
    story: RwLock<Option<Story>>,
    generating: Slot,
    saving: Slot,
}

impl Explorer {
    /// Start a session with an empty list; call [`load`](Self::load) to fill it.
    pub fn new(actions: Actions) -> Self {
        Self {
            actions,
            saved: RwLock::new(Vec::new()),
            current_location: RwLock::new(None),
            story: RwLock::new(None),
            generating: Slot::default(),
            saving: Slot::default(),
        }
    }

    /// The underlying actions.
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Load saved locations from the store, replacing the cached list.
    ///
    /// Returns the number loaded.
    #[instrument(skip(self))]
    pub async fn load(&self) -> usize {
        let locations = self.actions.list_locations().await;
        let count = locations.len();
        *self.saved.write().await = locations;
        debug!(count, "Saved locations loaded");
        count
    }

    /// Snapshot of the cached list, most recent first.
    pub async fn saved(&self) -> Vec<SavedLocation> {
        self.saved.read().await.clone()
    }

    /// The location most recently generated for.
    pub async fn current_location(&self) -> Option<String> {
        self.current_location.read().await.clone()
    }

    /// The last story generated in this session.
    pub async fn story(&self) -> Option<Story> {
        self.story.read().await.clone()
    }

    /// Whether a generation is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating.is_in_flight()
    }

    /// Whether a save is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving.is_in_flight()
    }

    /// Generate a story for `location_text` and make it the current story.
    ///
    /// The previous story is cleared when generation starts and replaced
    /// only on success.
    #[instrument(skip(self))]
    pub async fn generate(&self, location_text: &str) -> ActionOutcome<Story> {
        if location_text.trim().is_empty() {
            return ActionOutcome::failure(FailureKind::Validation, messages::EMPTY_LOCATION);
        }

        let Some(_guard) = self.generating.try_acquire() else {
            warn!("Generation already in flight");
            return ActionOutcome::failure(FailureKind::Busy, messages::GENERATION_BUSY);
        };

        *self.story.write().await = None;
        *self.current_location.write().await = Some(location_text.to_string());

        let outcome = self.actions.generate_story(location_text).await;
        if let ActionOutcome::Success(story) = &outcome {
            *self.story.write().await = Some(story.clone());
        }
        outcome
    }

    /// Generate a story for device coordinates.
    ///
    /// The coordinates become the location text `"{lat:.4}, {lon:.4}"`.
    #[instrument(skip(self))]
    pub async fn generate_here(&self, latitude: f64, longitude: f64) -> ActionOutcome<Story> {
        match Coordinates::new(latitude, longitude) {
            Ok(coordinates) => {
                let query = coordinates.to_query();
                info!(location = %query, "Location detected");
                self.generate(query.as_str()).await
            }
            Err(e) => ActionOutcome::failure(FailureKind::Validation, e.message),
        }
    }

    /// Generate a story for the saved location at `index` in the cached list.
    #[instrument(skip(self))]
    pub async fn open_saved(&self, index: usize) -> ActionOutcome<Story> {
        let name = self.saved.read().await.get(index).map(|l| l.name.clone());
        match name {
            Some(name) => self.generate(&name).await,
            None => ActionOutcome::failure(
                FailureKind::Validation,
                format!("No saved location at position {}.", index + 1),
            ),
        }
    }

    /// Save `location_text` unless a location with exactly that name is
    /// already in the cached list.
    ///
    /// A duplicate short-circuits with [`SaveResult::AlreadySaved`] without
    /// calling the summarizer or the store. After a new record is written
    /// the cached list is reloaded from the store.
    #[instrument(skip(self))]
    pub async fn save(&self, location_text: &str) -> ActionOutcome<SaveResult> {
        if location_text.trim().is_empty() {
            return ActionOutcome::failure(FailureKind::Validation, messages::INVALID_SAVE);
        }

        let existing = self
            .saved
            .read()
            .await
            .iter()
            .find(|l| l.name == location_text)
            .cloned();
        if let Some(existing) = existing {
            debug!("Location already saved");
            return ActionOutcome::Success(SaveResult::AlreadySaved(existing));
        }

        let Some(_guard) = self.saving.try_acquire() else {
            warn!("Save already in flight");
            return ActionOutcome::failure(FailureKind::Busy, messages::SAVE_BUSY);
        };

        let outcome = self.actions.save_location(location_text).await;
        if outcome.is_success() {
            self.load().await;
        }
        outcome.map(SaveResult::Saved)
    }

    /// Save the current location.
    pub async fn save_current(&self) -> ActionOutcome<SaveResult> {
        match self.current_location().await {
            Some(location) => self.save(&location).await,
            None => ActionOutcome::failure(FailureKind::Validation, messages::INVALID_SAVE),
        }
    }
}
