//! Row types for the `saved_locations` table.

use crate::schema::saved_locations;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use lore_core::SavedLocation;
use uuid::Uuid;

/// A stored location as read back from the database.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = saved_locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedLocationRow {
    /// Database-assigned id
    pub id: Uuid,
    /// Location text
    pub name: String,
    /// Generated summary
    pub summary: String,
    /// Database-assigned insert time
    pub created_at: DateTime<Utc>,
}

/// Values supplied on insert; `id` and `created_at` come from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = saved_locations)]
pub struct NewSavedLocationRow<'a> {
    /// Location text
    pub name: &'a str,
    /// Generated summary
    pub summary: &'a str,
}

impl From<SavedLocationRow> for SavedLocation {
    fn from(row: SavedLocationRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            summary: row.summary,
            created_at: row.created_at,
        }
    }
}
