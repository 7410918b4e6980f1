//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lore binary.

mod commands;
mod explore;
mod render;
mod serve;
mod story;

pub use commands::{Cli, Commands, OutputFormat};
pub use explore::run_explorer;
pub use serve::run_server;
pub use story::{list_locations, save_location, tell_story, tell_story_here};

/// Result type for command handlers.
pub type CliResult = Result<(), Box<dyn std::error::Error>>;
