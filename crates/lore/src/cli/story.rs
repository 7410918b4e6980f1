//! One-shot command handlers.

use lore_actions::{Explorer, Notification};
use lore_core::{Coordinates, LoreConfig};
use lore_database::LocationStore;

use super::render::{print_notification, print_saved, print_story};
use super::{CliResult, OutputFormat};

/// Generate and print a story for `location`.
pub async fn tell_story(explorer: &Explorer, location: &str, format: OutputFormat) -> CliResult {
    let outcome = explorer.generate(location).await;
    if let Some(notice) = Notification::for_story(&outcome) {
        print_notification(&notice);
        return Err(notice.description.into());
    }

    if let (Some(story), Some(current)) = (outcome.success(), explorer.current_location().await) {
        print_story(&current, story, format);
    }
    Ok(())
}

/// Generate and print a story for a coordinate pair.
pub async fn tell_story_here(
    explorer: &Explorer,
    latitude: f64,
    longitude: f64,
    format: OutputFormat,
) -> CliResult {
    if let Some(notice) = detection_notice(latitude, longitude) {
        print_notification(&notice);
    }

    let outcome = explorer.generate_here(latitude, longitude).await;
    if let Some(notice) = Notification::for_story(&outcome) {
        print_notification(&notice);
        return Err(notice.description.into());
    }

    if let (Some(story), Some(current)) = (outcome.success(), explorer.current_location().await) {
        print_story(&current, story, format);
    }
    Ok(())
}

/// Notice shown as a coordinate story starts; none for unusable coordinates.
pub fn detection_notice(latitude: f64, longitude: f64) -> Option<Notification> {
    Coordinates::new(latitude, longitude)
        .ok()
        .map(|_| Notification::location_detected())
}

/// Summarize and save `location`.
///
/// The saved list is loaded first so an existing entry is reported as
/// already saved.
pub async fn save_location(explorer: &Explorer, location: &str) -> CliResult {
    explorer.load().await;

    let outcome = explorer.save(location).await;
    let notice = Notification::for_save(&outcome);
    print_notification(&notice);

    if outcome.is_success() {
        Ok(())
    } else {
        Err(notice.description.into())
    }
}

/// List saved locations; no generation service is needed.
pub async fn list_locations(config: &LoreConfig, format: OutputFormat) -> CliResult {
    let store = LocationStore::from_config(&config.store).await;
    if !store.is_configured() {
        tracing::warn!("Location store is not configured; nothing to list");
    }
    print_saved(&store.list().await, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_notice_only_for_valid_coordinates() {
        let notice = detection_notice(48.85837, 2.29448).unwrap();
        assert_eq!(notice.title, "Location Detected");
        assert!(detection_notice(91.0, 0.0).is_none());
        assert!(detection_notice(f64::NAN, 0.0).is_none());
    }
}
