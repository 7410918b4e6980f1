//! Request and response bodies.

use lore_core::{SavedLocation, Story};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/story` and `POST /api/locations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationBody {
    /// Free-form location text
    #[serde(default)]
    pub location: String,
}

/// Body of `POST /api/story/here`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CoordinatesBody {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

/// A generated story together with the location text it was generated for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoryResponse {
    /// Location text used for generation
    pub location: String,
    /// Story title
    pub title: String,
    /// Story body
    pub story: String,
}

impl StoryResponse {
    /// Pair a story with its location.
    pub fn new(location: impl Into<String>, story: Story) -> Self {
        Self {
            location: location.into(),
            title: story.title,
            story: story.story,
        }
    }
}

/// Result of `POST /api/locations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    /// The stored record
    pub location: SavedLocation,
    /// True when the name was already saved and nothing was written
    pub already_saved: bool,
}

/// Failure body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    /// User-displayable message
    pub error: String,
}
