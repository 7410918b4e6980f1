//! Lore Explorer CLI binary.
//!
//! This binary provides command-line access to Lore Explorer:
//! - Tell stories about named places or coordinates
//! - Save and list locations
//! - Run an interactive explorer session
//! - Serve the HTTP JSON API

use clap::Parser;
use lore::{LoreConfig, build_explorer};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, list_locations, run_explorer, run_server, save_location, tell_story,
        tell_story_here,
    };

    // Secrets may live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    #[cfg(feature = "observability")]
    let provider = lore::observability::init_observability(
        lore::observability::ObservabilityConfig::new("lore")
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    #[cfg(not(feature = "observability"))]
    init_logging(log_level, cli.json_logs)?;

    let config = match &cli.config {
        Some(path) => LoreConfig::from_file(path)?,
        None => LoreConfig::load()?,
    };
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::List { format } => list_locations(&config, format).await,
        command => {
            let explorer = build_explorer(&config).await?;
            match command {
                Commands::Story { location, format } => {
                    tell_story(&explorer, &location, format).await
                }
                Commands::Here { lat, lon, format } => {
                    tell_story_here(&explorer, lat, lon, format).await
                }
                Commands::Save { location } => save_location(&explorer, &location).await,
                Commands::Explore => run_explorer(explorer).await,
                Commands::Serve { bind } => run_server(&config, explorer, bind).await,
                Commands::List { .. } => Ok(()),
            }
        }
    };

    #[cfg(feature = "observability")]
    lore::observability::shutdown_observability(provider);

    result
}

#[cfg(not(feature = "observability"))]
fn init_logging(level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
