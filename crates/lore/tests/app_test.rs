//! Configuration-to-session wiring.

mod test_utils;

use std::sync::Arc;

use lore::{
    FailureKind, GenerationConfig, GenerationErrorKind, LoreConfig, SaveResult, StoreBackend,
    build_driver, build_explorer_with,
};
use test_utils::{CannedDriver, config_file};

const MEMORY_CONFIG: &str = r#"
[generation]
model = "gemini-2.5-flash"
timeout_secs = 5

[store]
backend = "memory"
"#;

#[test]
fn config_file_layers_over_defaults() -> anyhow::Result<()> {
    let file = config_file(MEMORY_CONFIG);
    let config = LoreConfig::from_file(file.path())?;

    assert_eq!(config.generation.model(), "gemini-2.5-flash");
    assert_eq!(*config.generation.timeout_secs(), 5);
    assert_eq!(*config.store.backend(), StoreBackend::Memory);
    assert_eq!(config.server.bind(), "127.0.0.1:8080");
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    let result = LoreConfig::from_file("/nonexistent/lore-config.toml");
    assert!(result.is_err());
}

#[test]
fn driver_requires_an_api_key() {
    let err = match build_driver(&GenerationConfig::default()) {
        Ok(_) => panic!("driver built without a key"),
        Err(e) => e,
    };
    let generation = err.as_generation().expect("generation error");
    assert!(matches!(generation.kind, GenerationErrorKind::MissingApiKey));
}

#[test]
fn driver_builds_with_an_api_key() -> anyhow::Result<()> {
    let driver = build_driver(&GenerationConfig::default().with_api_key("test-key"))?;
    assert_eq!(driver.provider_name(), "gemini");
    assert_eq!(driver.model_name(), "gemini-2.0-flash");
    Ok(())
}

#[tokio::test]
async fn memory_backed_session_generates_and_saves() -> anyhow::Result<()> {
    let config = LoreConfig::from_toml_str(MEMORY_CONFIG)?;
    let explorer = build_explorer_with(Arc::new(CannedDriver), &config).await;

    assert!(explorer.actions().store().is_configured());
    assert_eq!(explorer.load().await, 0);

    let story = explorer.generate("Eiffel Tower, Paris").await;
    assert_eq!(story.success().map(|s| s.title.as_str()), Some("The Iron Lady"));

    let saved = explorer.save_current().await;
    assert!(matches!(saved.success(), Some(SaveResult::Saved(_))));
    assert_eq!(explorer.saved().await.len(), 1);

    let again = explorer.save("Eiffel Tower, Paris").await;
    assert!(matches!(again.success(), Some(SaveResult::AlreadySaved(_))));
    Ok(())
}

#[tokio::test]
async fn postgres_without_url_degrades() -> anyhow::Result<()> {
    let config = LoreConfig::from_toml_str("[store]\nbackend = \"postgres\"\n")?;
    let explorer = build_explorer_with(Arc::new(CannedDriver), &config).await;

    assert!(!explorer.actions().store().is_configured());
    assert_eq!(explorer.load().await, 0);

    let outcome = explorer.save("Kyoto, Japan").await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::StoreUnavailable));
    Ok(())
}
