//! Terminal rendering shared by the one-shot commands and the explorer.

use lore_actions::{Notification, NotificationLevel};
use lore_core::{SavedLocation, Story};

use super::OutputFormat;

/// Print a story under its location heading.
pub fn print_story(location: &str, story: &Story, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!("\n{}", story.title);
            println!("{}", "=".repeat(story.title.chars().count()));
            println!("{}\n", location);
            for paragraph in story.paragraphs() {
                println!("{}\n", paragraph);
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "location": location,
                "title": story.title,
                "story": story.story,
            });
            println!("{}", value);
        }
    }
}

/// Print saved locations, numbered from 1.
pub fn print_saved(locations: &[SavedLocation], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if locations.is_empty() {
                println!("No saved locations yet.");
                return;
            }
            println!("\nSaved locations ({}):\n", locations.len());
            for (i, location) in locations.iter().enumerate() {
                println!(
                    "{:>3}. {}  ({})",
                    i + 1,
                    location.name,
                    location.created_at.format("%Y-%m-%d %H:%M")
                );
                println!("     {}", location.summary);
            }
            println!();
        }
        OutputFormat::Json => match serde_json::to_string(locations) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize saved locations"),
        },
    }
}

/// Print a notice; errors go to stderr.
pub fn print_notification(notification: &Notification) {
    match notification.level {
        NotificationLevel::Info => println!("✓ {}", notification),
        NotificationLevel::Error => eprintln!("✗ {}", notification),
    }
}
