//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lore Explorer - stories about places, told by a generative model
#[derive(Parser, Debug)]
#[command(name = "lore")]
#[command(about = "Stories about places, told by a generative model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(short, long, global = true, env = "LORE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a story about a location
    Story {
        /// Location name, e.g. "Eiffel Tower, Paris"
        location: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a story about a latitude/longitude position
    Here {
        /// Degrees north, -90 to 90
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Degrees east, -180 to 180
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Summarize a location and save it
    Save {
        /// Location name
        location: String,
    },

    /// List saved locations, most recent first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Interactive session
    Explore,

    /// Serve the HTTP JSON API
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
