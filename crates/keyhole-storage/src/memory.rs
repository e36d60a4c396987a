use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use keyhole_core::repository::{Repository, Result, ShortUrlRecord};
use keyhole_core::{ShortId, StorageError};

/// In-memory implementation of the [`Repository`] trait using DashMap.
///
/// DashMap uses sharded locks, allowing concurrent reads and writes to
/// different buckets without blocking. Used by tests and by the gateway
/// when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    storage: DashMap<ShortId, String>,
}

impl MemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn insert(&self, record: &ShortUrlRecord) -> Result<()> {
        match self.storage.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(record.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record.target_url.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: &ShortId) -> Result<Option<ShortUrlRecord>> {
        Ok(self.storage.get(id).map(|entry| ShortUrlRecord {
            id: id.clone(),
            target_url: entry.value().clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShortId {
        ShortId::new(s).unwrap()
    }

    fn record(s: &str, url: &str) -> ShortUrlRecord {
        ShortUrlRecord {
            id: id(s),
            target_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = MemoryRepository::new();

        repo.insert(&record("abc123", "https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&id("abc123")).await.unwrap().unwrap();
        assert_eq!(result.target_url, "https://example.com");
        assert_eq!(result.id, id("abc123"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = MemoryRepository::new();

        let result = repo.get(&id("0000aa")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = MemoryRepository::new();

        repo.insert(&record("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&record("abc123", "https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));

        // The original record is untouched.
        let result = repo.get(&id("abc123")).await.unwrap().unwrap();
        assert_eq!(result.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn len_tracks_inserts() {
        let repo = MemoryRepository::new();
        assert!(repo.is_empty());

        repo.insert(&record("abc123", "https://example.com"))
            .await
            .unwrap();
        repo.insert(&record("def456", "https://example.org"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(MemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let r = ShortUrlRecord {
                    id: ShortId::new(format!("{:06x}", i)).unwrap(),
                    target_url: format!("https://example{}.com", i),
                };
                repo.insert(&r).await.unwrap();
            }));
        }

        for i in 0..10u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortId::new(format!("{:06x}", i)).unwrap();
                let _ = repo.get(&c).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u32 {
            let c = ShortId::new(format!("{:06x}", i)).unwrap();
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.target_url, format!("https://example{}.com", i));
        }
    }
}
