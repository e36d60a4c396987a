use crate::generator::IdGenerator;
use async_trait::async_trait;
use keyhole_core::repository::{Repository, Result, ShortUrlRecord, UrlStore};
use keyhole_core::{ShortId, StorageError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default bound on identifier-generation attempts per create.
pub const DEFAULT_CREATE_ATTEMPTS: usize = 5;

/// A concrete [`UrlStore`] composing a storage backend with an id
/// generator.
///
/// `create` retries with a fresh identifier when the backend reports a
/// conflict. The insert itself is the collision probe, so two concurrent
/// creates can never both win the same id.
#[derive(Debug)]
pub struct RecordStore<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: usize,
}

// Clones share the same backend and generator.
impl<R, G> Clone for RecordStore<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<R: Repository, G: IdGenerator> RecordStore<R, G> {
    /// Creates a store over the given backend and generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_CREATE_ATTEMPTS,
        }
    }

    /// Overrides the bound on generation attempts. Clamped to at least one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns a reference to the underlying backend.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: IdGenerator> UrlStore for RecordStore<R, G> {
    async fn create(&self, target_url: &str) -> Result<ShortUrlRecord> {
        if target_url.is_empty() {
            return Err(StorageError::InvalidData(
                "target url must not be empty".to_string(),
            ));
        }

        let mut last_conflict = None;
        for attempt in 1..=self.max_attempts {
            let record = ShortUrlRecord {
                id: self.generator.generate(),
                target_url: target_url.to_owned(),
            };

            match self.repository.insert(&record).await {
                Ok(()) => {
                    debug!(id = %record.id, "stored new short url record");
                    return Ok(record);
                }
                Err(StorageError::Conflict(id)) => {
                    warn!(id = %id, attempt, "short id collision, retrying");
                    last_conflict = Some(StorageError::Conflict(id));
                }
                Err(other) => return Err(other),
            }
        }

        // Every attempt collided; surface the final conflict.
        Err(last_conflict
            .unwrap_or_else(|| StorageError::Conflict("id space exhausted".to_string())))
    }

    async fn find_by_id(&self, id: &ShortId) -> Result<Option<ShortUrlRecord>> {
        self.repository.get(id).await
    }
}
