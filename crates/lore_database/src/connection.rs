//! Connection pooling and migrations.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use lore_error::{StoreError, StoreErrorKind};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pooled PostgreSQL connections.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Build a connection pool for `database_url`.
///
/// No connection is opened here; an unreachable server surfaces on first
/// use, so reads can degrade instead of failing startup.
pub fn build_pool(database_url: &str, max_size: u32) -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size.max(1))
        .build_unchecked(manager)
}

/// Run pending migrations, returning how many were applied.
///
/// # Errors
///
/// Returns [`StoreErrorKind::Migration`] if a migration fails.
pub fn run_migrations(conn: &mut PgConnection) -> Result<usize, StoreError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| applied.len())
        .map_err(|e| StoreError::new(StoreErrorKind::Migration(e.to_string())))
}
