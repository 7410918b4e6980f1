//! The location store used by the workflow.

use std::sync::Arc;

use lore_core::{SavedLocation, StoreBackend, StoreConfig};
use lore_error::{LoreResult, StoreError, StoreErrorKind};
use lore_interface::LocationRepository;
use tracing::{error, info, instrument, warn};

use crate::{InMemoryLocationRepository, PostgresLocationRepository};

/// Saved-location persistence with the read/write failure policy applied.
///
/// - [`list`](Self::list) never fails: an unconfigured or unreachable
///   backend yields an empty list and a `warn` event.
/// - [`add`](Self::add) fails with [`StoreErrorKind::Unconfigured`] when no
///   backend is present, and passes backend errors through.
///
/// # Example
///
/// ```
/// use lore_database::LocationStore;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = LocationStore::unconfigured();
/// assert!(store.list().await.is_empty());
/// assert!(store.add("Kyoto", "Former capital.").await.is_err());
/// # }
/// ```
#[derive(Clone, Default)]
pub struct LocationStore {
    repository: Option<Arc<dyn LocationRepository>>,
}

impl std::fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationStore")
            .field("backend", &self.backend_name())
            .finish()
    }
}

impl LocationStore {
    /// A store over `repository`.
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self {
            repository: Some(repository),
        }
    }

    /// A store with no backend.
    pub fn unconfigured() -> Self {
        Self { repository: None }
    }

    /// Build the store selected by `config`.
    ///
    /// PostgreSQL without a connection string yields an unconfigured store.
    /// A failed migration is logged and the store stays configured, so
    /// reads degrade and writes fail until the database is fixed.
    #[instrument(skip(config), fields(backend = %config.backend()))]
    pub async fn from_config(config: &StoreConfig) -> Self {
        match config.backend() {
            StoreBackend::Memory => {
                info!("Using in-memory location store");
                Self::new(Arc::new(InMemoryLocationRepository::new()))
            }
            StoreBackend::Postgres => {
                let repository = match PostgresLocationRepository::connect(config) {
                    Ok(repository) => repository,
                    Err(e) => {
                        warn!(error = %e, "Location store not configured; saving is disabled");
                        return Self::unconfigured();
                    }
                };

                if *config.run_migrations()
                    && let Err(e) = repository.run_migrations().await
                {
                    error!(error = %e, "Failed to run location store migrations");
                }

                info!("Using PostgreSQL location store");
                Self::new(Arc::new(repository))
            }
        }
    }

    /// Whether a backend is present.
    pub fn is_configured(&self) -> bool {
        self.repository.is_some()
    }

    /// Backend name, if configured.
    pub fn backend_name(&self) -> Option<&'static str> {
        self.repository.as_ref().map(|r| r.backend_name())
    }

    /// All saved locations, most recent first.
    ///
    /// Degrades to an empty list when the store is unconfigured or failing.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<SavedLocation> {
        let Some(repository) = &self.repository else {
            warn!("Location store not configured; returning no saved locations");
            return Vec::new();
        };

        match repository.list_recent().await {
            Ok(mut locations) => {
                SavedLocation::sort_recent_first(&mut locations);
                locations
            }
            Err(e) => {
                warn!(
                    backend = repository.backend_name(),
                    error = %e,
                    "Failed to load saved locations; returning none"
                );
                Vec::new()
            }
        }
    }

    /// Persist a new location and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreErrorKind::Unconfigured`] without a backend, or the
    /// backend's own error.
    #[instrument(skip(self, summary))]
    pub async fn add(&self, name: &str, summary: &str) -> LoreResult<SavedLocation> {
        let Some(repository) = &self.repository else {
            error!("Attempted to save a location without a configured store");
            return Err(StoreError::new(StoreErrorKind::Unconfigured).into());
        };

        let saved = repository.insert(name, summary).await?;
        info!(id = %saved.id, backend = repository.backend_name(), "Location saved");
        Ok(saved)
    }
}
