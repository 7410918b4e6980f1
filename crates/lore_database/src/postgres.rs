//! PostgreSQL-backed repository.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use lore_core::{SavedLocation, StoreConfig};
use lore_error::{LoreResult, StoreError, StoreErrorKind};
use lore_interface::LocationRepository;
use tracing::{debug, instrument};

use crate::connection::{PgPool, build_pool, run_migrations};
use crate::models::{NewSavedLocationRow, SavedLocationRow};
use crate::schema::saved_locations;

/// Saved locations in the `saved_locations` table.
///
/// Diesel is synchronous, so every query runs on the blocking thread pool
/// with a connection checked out of the r2d2 pool.
#[derive(Clone)]
pub struct PostgresLocationRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresLocationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresLocationRepository")
            .field("max_size", &self.pool.max_size())
            .finish()
    }
}

impl PostgresLocationRepository {
    /// Create a repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a repository from store settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreErrorKind::Unconfigured`] when no connection string is set.
    pub fn connect(config: &StoreConfig) -> LoreResult<Self> {
        let url = config
            .database_url()
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| StoreError::new(StoreErrorKind::Unconfigured))?;
        Ok(Self::new(build_pool(url, *config.pool_size())))
    }

    /// Apply embedded migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> LoreResult<usize> {
        let applied = self.with_conn(run_migrations).await?;
        debug!(applied, "Migrations complete");
        Ok(applied)
    }

    async fn with_conn<T, F>(&self, f: F) -> LoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?;
        Ok(result?)
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
    #[instrument(skip(self, summary), fields(summary_len = summary.len()))]
    async fn insert(&self, name: &str, summary: &str) -> LoreResult<SavedLocation> {
        let name = name.to_string();
        let summary = summary.to_string();

        let row = self
            .with_conn(move |conn| {
                diesel::insert_into(saved_locations::table)
                    .values(&NewSavedLocationRow {
                        name: &name,
                        summary: &summary,
                    })
                    .returning(SavedLocationRow::as_returning())
                    .get_result(conn)
                    .map_err(StoreError::from)
            })
            .await?;

        debug!(id = %row.id, "Location inserted");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self) -> LoreResult<Vec<SavedLocation>> {
        let rows = self
            .with_conn(|conn| {
                saved_locations::table
                    .order(saved_locations::created_at.desc())
                    .select(SavedLocationRow::as_select())
                    .load(conn)
                    .map_err(StoreError::from)
            })
            .await?;

        debug!(count = rows.len(), "Locations loaded");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
