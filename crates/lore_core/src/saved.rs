//! Persisted location records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location the user chose to keep, with its AI-generated summary.
///
/// `id` and `created_at` are assigned by the store at write time and never
/// supplied by the client. Records are never updated or deleted.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use lore_core::SavedLocation;
///
/// let saved = SavedLocation {
///     id: "7f9c".into(),
///     name: "Eiffel Tower, Paris".into(),
///     summary: "Wrought-iron lattice tower finished in 1889.".into(),
///     created_at: Utc::now(),
/// };
///
/// let json = serde_json::to_value(&saved).unwrap();
/// assert!(json.get("createdAt").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    /// Store-assigned unique identifier
    pub id: String,
    /// Location text exactly as saved
    pub name: String,
    /// Summary produced by the summarizer
    pub summary: String,
    /// Store-assigned creation time
    pub created_at: DateTime<Utc>,
}

impl SavedLocation {
    /// Order a list most recent first, the order every read returns.
    pub fn sort_recent_first(locations: &mut [SavedLocation]) {
        locations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}
