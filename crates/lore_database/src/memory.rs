//! In-memory repository.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use lore_core::SavedLocation;
use lore_error::LoreResult;
use lore_interface::LocationRepository;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Saved locations held in process memory.
///
/// Ids are random UUIDs; timestamps come from the system clock but are
/// forced strictly increasing so insertion order and `created_at` agree.
/// All data is lost when the last clone is dropped.
///
/// # Example
///
/// ```
/// use lore_database::InMemoryLocationRepository;
/// use lore_interface::LocationRepository;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryLocationRepository::new();
/// repo.insert("Kyoto", "Former imperial capital.").await?;
/// repo.insert("Nara", "Deer and temples.").await?;
///
/// let names: Vec<_> = repo.list_recent().await?.into_iter().map(|l| l.name).collect();
/// assert_eq!(names, ["Nara", "Kyoto"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocationRepository {
    records: Arc<RwLock<Vec<SavedLocation>>>,
}

impl InMemoryLocationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn insert(&self, name: &str, summary: &str) -> LoreResult<SavedLocation> {
        let mut records = self.records.write().await;

        let now = Utc::now();
        let created_at = match records.last() {
            Some(last) if now <= last.created_at => last.created_at + Duration::microseconds(1),
            _ => now,
        };

        let record = SavedLocation {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            summary: summary.to_string(),
            created_at,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self) -> LoreResult<Vec<SavedLocation>> {
        Ok(self.records.read().await.iter().rev().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timestamps_strictly_increase() {
        let repo = InMemoryLocationRepository::new();
        let mut previous = None;
        for i in 0..50 {
            let saved = repo.insert(&format!("Place {i}"), "x").await.unwrap();
            if let Some(prev) = previous {
                assert!(saved.created_at > prev);
            }
            previous = Some(saved.created_at);
        }
        assert_eq!(repo.len().await, 50);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let repo = InMemoryLocationRepository::new();
        let a = repo.insert("Same", "one").await.unwrap();
        let b = repo.insert("Same", "two").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_recent().await.unwrap().len(), 2);
    }
}
