//! Startup configuration.
//!
//! Configuration is built once when the process starts and passed by
//! reference to the generation driver and the location store. Sources, in
//! order of precedence (later sources override earlier):
//!
//! 1. Bundled defaults (`lore.toml` shipped with the workspace)
//! 2. `~/.config/lore/lore.toml`
//! 3. `./lore.toml`
//! 4. `LORE__<SECTION>__<KEY>` environment variables
//!
//! Secrets fall back to the conventional `GEMINI_API_KEY` and `DATABASE_URL`
//! variables when the files leave them unset.

use config::{Config, Environment, File, FileFormat};
use lore_error::{ConfigError, LoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lore.toml");

/// Settings for the generation service.
#[derive(Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct GenerationConfig {
    /// Model identifier, e.g. "gemini-2.0-flash"
    model: String,
    /// API key; falls back to `GEMINI_API_KEY`
    #[serde(default, skip_serializing)]
    api_key: Option<String>,
    /// REST endpoint root
    base_url: String,
    /// Sampling temperature
    temperature: f32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
    /// Upper bound on one generation call, retries included
    timeout_secs: u64,
    /// Retries for transient failures (0 disables retry)
    max_retries: usize,
    /// Initial backoff override; the error's own strategy is used when unset
    #[serde(default)]
    retry_backoff_ms: Option<u64>,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.9,
            max_output_tokens: 2048,
            timeout_secs: 60,
            max_retries: 2,
            retry_backoff_ms: None,
        }
    }
}

impl GenerationConfig {
    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the REST endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set retry behaviour.
    pub fn with_retries(mut self, max_retries: usize, backoff_ms: Option<u64>) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_ms = backoff_ms;
        self
    }
}

/// Which document store backs saved locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL through `database_url`
    #[default]
    #[display("postgres")]
    Postgres,
    /// Process-local storage, lost on exit
    #[display("memory")]
    Memory,
}

/// Settings for the location store.
#[derive(Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct StoreConfig {
    /// Backend selection
    backend: StoreBackend,
    /// Connection string; falls back to `DATABASE_URL`
    #[serde(default, skip_serializing)]
    database_url: Option<String>,
    /// Connection pool size
    pool_size: u32,
    /// Apply embedded migrations at startup
    run_migrations: bool,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("backend", &self.backend)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("pool_size", &self.pool_size)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Postgres,
            database_url: None,
            pool_size: 4,
            run_migrations: true,
        }
    }
}

impl StoreConfig {
    /// A configuration selecting the in-memory backend.
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Self::default()
        }
    }

    /// Set the connection string.
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = Some(database_url.into());
        self
    }

    /// Whether a backend can be constructed from these settings.
    ///
    /// The in-memory backend is always available; PostgreSQL needs a
    /// connection string.
    pub fn is_configured(&self) -> bool {
        match self.backend {
            StoreBackend::Memory => true,
            StoreBackend::Postgres => self
                .database_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty()),
        }
    }
}

/// Settings for the HTTP front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct ServerConfig {
    /// Socket address to listen on
    bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Override the listen address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use lore_core::LoreConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LoreConfig::load()?;
/// println!("model: {}", config.generation.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct LoreConfig {
    /// Generation service settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Location store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// HTTP front end settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl LoreConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> LoreResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lore/lore.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("lore").required(false))
            .add_source(environment());

        let config = Self::finish(builder)?;
        Ok(config.with_secret_fallbacks())
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> LoreResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .add_source(environment());

        let config = Self::finish(builder)?;
        Ok(config.with_secret_fallbacks())
    }

    /// Parse configuration from TOML text layered over the bundled defaults.
    ///
    /// No environment variables are consulted.
    pub fn from_toml_str(toml: &str) -> LoreResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LoreResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Fill unset secrets from the conventional environment variables.
    pub fn with_secret_fallbacks(mut self) -> Self {
        if self.generation.api_key.is_none() {
            self.generation.api_key = std::env::var("GEMINI_API_KEY").ok();
        }
        if self.store.database_url.is_none() {
            self.store.database_url = std::env::var("DATABASE_URL").ok();
        }
        self
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LORE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = LoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.generation.model(), "gemini-2.0-flash");
        assert_eq!(*config.generation.timeout_secs(), 60);
        assert_eq!(*config.store.backend(), StoreBackend::Postgres);
        assert_eq!(config.server.bind(), "127.0.0.1:8080");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = LoreConfig::from_toml_str(
            r#"
            [generation]
            model = "gemini-2.5-flash"
            timeout_secs = 15

            [store]
            backend = "memory"
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.model(), "gemini-2.5-flash");
        assert_eq!(config.generation.timeout(), Duration::from_secs(15));
        assert_eq!(*config.generation.max_retries(), 2);
        assert!(config.store.is_configured());
    }

    #[test]
    fn postgres_without_url_is_unconfigured() {
        assert!(!StoreConfig::default().is_configured());
        assert!(StoreConfig::default()
            .with_database_url("postgres://localhost/lore")
            .is_configured());
        assert!(!StoreConfig::default().with_database_url(" ").is_configured());
    }

    #[test]
    fn from_file_reads_toml() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:9000\"").unwrap();

        let config = LoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.bind(), "0.0.0.0:9000");
        assert_eq!(config.generation.model(), "gemini-2.0-flash");
    }

    #[test]
    fn unknown_backend_is_a_config_error() {
        let result = LoreConfig::from_toml_str("[store]\nbackend = \"mongo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let generation = GenerationConfig::default().with_api_key("sk-secret");
        let rendered = format!("{:?}", generation);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("redacted"));
    }
}
