//! Transient notices shown after an action.

use lore_core::Story;
use serde::{Deserialize, Serialize};

use crate::outcome::messages;
use crate::{ActionOutcome, FailureKind, SaveResult};

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Neutral information
    Info,
    /// Something failed
    Error,
}

/// A short `{level, title, description}` notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}: {}", title, description)]
pub struct Notification {
    /// Presentation level
    pub level: NotificationLevel,
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
}

impl Notification {
    fn new(level: NotificationLevel, title: &str, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// Notice for a generate outcome; a success needs none since the story is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use lore_actions::{ActionOutcome, FailureKind, Notification};
    /// use lore_core::Story;
    ///
    /// let outcome: ActionOutcome<Story> =
    ///     ActionOutcome::failure(FailureKind::Validation, "Please provide a location.");
    /// let notice = Notification::for_story(&outcome).unwrap();
    /// assert_eq!(notice.title, "No Location");
    /// ```
    pub fn for_story(outcome: &ActionOutcome<Story>) -> Option<Self> {
        match outcome {
            ActionOutcome::Success(_) => None,
            ActionOutcome::Failure {
                kind: FailureKind::Validation,
                message,
            } => {
                let description = if message == messages::EMPTY_LOCATION {
                    "Please enter a location to get a story."
                } else {
                    message.as_str()
                };
                Some(Self::new(NotificationLevel::Error, "No Location", description))
            }
            ActionOutcome::Failure { message, .. } => {
                Some(Self::new(NotificationLevel::Error, "Error", message.clone()))
            }
        }
    }

    /// Notice for a save outcome.
    pub fn for_save(outcome: &ActionOutcome<SaveResult>) -> Self {
        match outcome {
            ActionOutcome::Success(SaveResult::Saved(saved)) => Self::new(
                NotificationLevel::Info,
                "Location Saved!",
                format!("\"{}\" has been added to your collection.", saved.name),
            ),
            ActionOutcome::Success(SaveResult::AlreadySaved(_)) => Self::new(
                NotificationLevel::Info,
                "Already Saved",
                "This location is already in your collection.",
            ),
            ActionOutcome::Failure { message, .. } => {
                Self::new(NotificationLevel::Error, "Save Failed", message.clone())
            }
        }
    }

    /// Notice shown when device coordinates start a generation.
    pub fn location_detected() -> Self {
        Self::new(
            NotificationLevel::Info,
            "Location Detected",
            "Generating a story for your current location.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::SavedLocation;

    fn saved(name: &str) -> SavedLocation {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": name,
            "summary": "s",
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn save_notices() {
        let outcome = ActionOutcome::Success(SaveResult::Saved(saved("Kyoto")));
        let notice = Notification::for_save(&outcome);
        assert_eq!(notice.title, "Location Saved!");
        assert_eq!(notice.description, "\"Kyoto\" has been added to your collection.");

        let duplicate = ActionOutcome::Success(SaveResult::AlreadySaved(saved("Kyoto")));
        assert_eq!(Notification::for_save(&duplicate).title, "Already Saved");

        let failed: ActionOutcome<SaveResult> =
            ActionOutcome::failure(FailureKind::StoreUnavailable, messages::SAVE_FAILED);
        let notice = Notification::for_save(&failed);
        assert_eq!(notice.level, NotificationLevel::Error);
        assert_eq!(notice.description, messages::SAVE_FAILED);
    }

    #[test]
    fn generation_failure_notice() {
        let failed: ActionOutcome<Story> =
            ActionOutcome::failure(FailureKind::Generation, messages::GENERATION_FAILED);
        let notice = Notification::for_story(&failed).unwrap();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, messages::GENERATION_FAILED);
    }

    #[test]
    fn renders_title_and_description() {
        let notice = Notification::location_detected();
        assert_eq!(notice.to_string(), format!("{}: {}", notice.title, notice.description));
    }
}
