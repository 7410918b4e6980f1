//! Generated content shapes.

use crate::{OutputShape, ShapeField};
use serde::{Deserialize, Serialize};

/// A titled narrative about a location.
///
/// Exists only in a generation response and in transient session state;
/// stories are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Story {
    /// Title of the story
    pub title: String,
    /// The story text, usually several paragraphs separated by blank lines
    pub story: String,
}

impl Story {
    /// The output shape the generation service is asked to fill.
    pub fn shape() -> OutputShape {
        OutputShape::new(
            "story",
            vec![
                ShapeField::new("title", "The title of the generated story."),
                ShapeField::new("story", "The generated story related to the location."),
            ],
        )
    }

    /// Non-empty paragraphs of the story text.
    ///
    /// # Examples
    ///
    /// ```
    /// use lore_core::Story;
    ///
    /// let story = Story {
    ///     title: "Iron Lady".into(),
    ///     story: "Built for 1889.\n\nNearly torn down in 1909.".into(),
    /// };
    /// assert_eq!(story.paragraphs().count(), 2);
    /// ```
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.story
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// True when both title and body carry text.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.story.trim().is_empty()
    }
}

/// Visitor-oriented summary of a location's history and culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationSummary {
    /// The summary text
    pub summary: String,
}

impl LocationSummary {
    /// The output shape the generation service is asked to fill.
    pub fn shape() -> OutputShape {
        OutputShape::new(
            "location_summary",
            vec![ShapeField::new(
                "summary",
                "A summary of the key historical and cultural details of the location.",
            )],
        )
    }
}
