use crate::error::StorageError;
use crate::short_id::ShortId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A stored mapping from a short identifier to its target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlRecord {
    /// Public-facing lookup key.
    pub id: ShortId,
    /// The original, unmodified URL supplied at creation time.
    pub target_url: String,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Low-level persistence contract implemented by storage backends.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Persists a new record. Returns `Err(Conflict)` if the id is already taken.
    async fn insert(&self, record: &ShortUrlRecord) -> Result<()>;

    /// Retrieves the record for a given id.
    /// Returns `None` if no record matches.
    async fn get(&self, id: &ShortId) -> Result<Option<ShortUrlRecord>>;
}

/// The store contract: identifier generation plus persistence.
///
/// A lookup miss is an explicit `None`, never an error. Callers must
/// branch on it.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Generates a fresh identifier, persists `{id, target_url}`, and
    /// returns the stored record.
    async fn create(&self, target_url: &str) -> Result<ShortUrlRecord>;

    /// Looks up a record by exact identifier match.
    async fn find_by_id(&self, id: &ShortId) -> Result<Option<ShortUrlRecord>>;
}
