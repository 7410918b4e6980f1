//! Location store for Lore Explorer.
//!
//! [`LocationStore`] is what the workflow talks to. It wraps an optional
//! [`LocationRepository`](lore_interface::LocationRepository) and applies
//! the failure policy: reads degrade to an empty list, writes fail loudly.
//!
//! # Backends
//!
//! - [`PostgresLocationRepository`]: diesel over an r2d2 pool, with embedded
//!   migrations creating the `saved_locations` table
//! - [`InMemoryLocationRepository`]: process-local, for tests and demos

mod connection;
mod memory;
mod models;
mod postgres;
mod store;

pub mod schema;

pub use connection::{PgPool, build_pool, run_migrations};
pub use memory::InMemoryLocationRepository;
pub use models::{NewSavedLocationRow, SavedLocationRow};
pub use postgres::PostgresLocationRepository;
pub use store::LocationStore;
