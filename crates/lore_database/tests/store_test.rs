//! Location store policy tests.

use std::sync::Arc;

use async_trait::async_trait;
use lore_core::{SavedLocation, StoreConfig};
use lore_database::{InMemoryLocationRepository, LocationStore};
use lore_error::{LoreResult, StoreError, StoreErrorKind};
use lore_interface::LocationRepository;

/// Repository whose every call fails as if the server were down.
struct UnreachableRepository;

#[async_trait]
impl LocationRepository for UnreachableRepository {
    async fn insert(&self, _name: &str, _summary: &str) -> LoreResult<SavedLocation> {
        Err(StoreError::new(StoreErrorKind::Connection("connection refused".into())).into())
    }

    async fn list_recent(&self) -> LoreResult<Vec<SavedLocation>> {
        Err(StoreError::new(StoreErrorKind::Connection("connection refused".into())).into())
    }

    fn backend_name(&self) -> &'static str {
        "unreachable"
    }
}

#[tokio::test]
async fn unconfigured_store_reads_empty_and_rejects_writes() {
    let store = LocationStore::unconfigured();
    assert!(!store.is_configured());
    assert!(store.list().await.is_empty());

    let err = store.add("Kyoto", "Former capital.").await.unwrap_err();
    assert!(err.as_store().is_some_and(StoreError::is_unconfigured));
}

#[tokio::test]
async fn unreachable_store_reads_empty_and_fails_writes() {
    let store = LocationStore::new(Arc::new(UnreachableRepository));
    assert!(store.is_configured());
    assert!(store.list().await.is_empty());

    let err = store.add("Kyoto", "Former capital.").await.unwrap_err();
    let store_err = err.as_store().unwrap();
    assert!(matches!(store_err.kind, StoreErrorKind::Connection(_)));
}

#[tokio::test]
async fn saved_records_list_most_recent_first() -> anyhow::Result<()> {
    let store = LocationStore::new(Arc::new(InMemoryLocationRepository::new()));

    let first = store.add("Kyoto", "Former imperial capital.").await?;
    let second = store.add("Eiffel Tower, Paris", "Iron lattice tower.").await?;

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], second);
    assert_eq!(listed[1], first);
    assert!(listed[0].created_at > listed[1].created_at);
    Ok(())
}

#[tokio::test]
async fn duplicate_names_are_stored_separately() -> anyhow::Result<()> {
    let store = LocationStore::new(Arc::new(InMemoryLocationRepository::new()));
    store.add("Petra", "Rose city.").await?;
    store.add("Petra", "Rock-cut city.").await?;
    assert_eq!(store.list().await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn config_selects_backend() {
    let memory = LocationStore::from_config(&StoreConfig::memory()).await;
    assert_eq!(memory.backend_name(), Some("memory"));

    let postgres_without_url = LocationStore::from_config(&StoreConfig::default()).await;
    assert!(!postgres_without_url.is_configured());
}
