use crate::error::ResolveError;
use async_trait::async_trait;
use keyhole_core::{ShortId, UrlStore};
use std::sync::Arc;
use tracing::{debug, trace};

/// Schemes that survive normalization untouched.
const RECOGNIZED_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "ftps://"];

/// Resolution side of the service: lookup, then normalize.
#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves an identifier to its redirect target.
    /// Returns `None` when no record matches.
    async fn resolve(&self, id: &ShortId) -> Result<Option<String>, ResolveError>;
}

/// A concrete implementation of the [`Redirector`] trait.
///
/// Reads never mutate the store; resolving the same id repeatedly
/// yields the same normalized target.
#[derive(Debug)]
pub struct RedirectorService<S> {
    store: Arc<S>,
}

impl<S: UrlStore> RedirectorService<S> {
    /// Creates a new `RedirectorService` over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl<S: UrlStore> Redirector for RedirectorService<S> {
    async fn resolve(&self, id: &ShortId) -> Result<Option<String>, ResolveError> {
        trace!(id = %id, "resolving short id");

        match self.store.find_by_id(id).await? {
            Some(record) => {
                let target = normalize_target(&record.target_url);
                debug!(id = %id, target = %target, "resolved short id");
                Ok(Some(target))
            }
            None => {
                trace!(id = %id, "short id not found");
                Ok(None)
            }
        }
    }
}

/// Prefixes `http://` unless the URL already starts with a recognized
/// scheme. The scheme match is case-insensitive; the result is not
/// re-validated for well-formedness.
pub fn normalize_target(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if RECOGNIZED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        url.to_owned()
    } else {
        format!("http://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyhole_core::repository::{Result as StoreResult, ShortUrlRecord};
    use keyhole_core::StorageError;
    use keyhole_storage::generator::seq::SeqIdGenerator;
    use keyhole_storage::{MemoryRepository, RecordStore};

    fn id(s: &str) -> ShortId {
        ShortId::new(s).unwrap()
    }

    async fn service_with(
        target: &str,
    ) -> (
        RedirectorService<RecordStore<MemoryRepository, SeqIdGenerator>>,
        ShortId,
    ) {
        let store = RecordStore::new(MemoryRepository::new(), SeqIdGenerator::new());
        let record = store.create(target).await.unwrap();
        (RedirectorService::new(store), record.id)
    }

    #[tokio::test]
    async fn resolve_bare_host_gets_http_prefix() {
        let (service, id) = service_with("www.freecodecamp.org").await;

        let target = service.resolve(&id).await.unwrap().unwrap();
        assert_eq!(target, "http://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn resolve_keeps_recognized_schemes() {
        for url in [
            "http://example.com",
            "https://example.com",
            "ftp://example.com",
            "ftps://example.com",
        ] {
            let (service, id) = service_with(url).await;
            let target = service.resolve(&id).await.unwrap().unwrap();
            assert_eq!(target, url);
        }
    }

    #[tokio::test]
    async fn resolve_missing_id_is_none() {
        let store = RecordStore::new(MemoryRepository::new(), SeqIdGenerator::new());
        let service = RedirectorService::new(store);

        let result = service.resolve(&id("0a1b2c")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let (service, id) = service_with("example.com/page").await;

        let first = service.resolve(&id).await.unwrap().unwrap();
        let second = service.resolve(&id).await.unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "http://example.com/page");
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_resolve_error() {
        struct UnavailableStore;

        #[async_trait]
        impl UrlStore for UnavailableStore {
            async fn create(&self, _target_url: &str) -> StoreResult<ShortUrlRecord> {
                Err(StorageError::Unavailable("connection refused".to_string()))
            }

            async fn find_by_id(&self, _id: &ShortId) -> StoreResult<Option<ShortUrlRecord>> {
                Err(StorageError::Unavailable("connection refused".to_string()))
            }
        }

        let service = RedirectorService::new(UnavailableStore);

        let err = service.resolve(&id("0a1b2c")).await.unwrap_err();
        assert!(matches!(err, ResolveError::Storage(_)));
    }

    #[test]
    fn normalization_is_case_insensitive_on_the_scheme() {
        assert_eq!(normalize_target("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(
            normalize_target("HtTpS://example.com"),
            "HtTpS://example.com"
        );
    }

    #[test]
    fn normalization_prefixes_unrecognized_schemes() {
        assert_eq!(
            normalize_target("gopher://example.com"),
            "http://gopher://example.com"
        );
        assert_eq!(normalize_target("ftpx://e.com"), "http://ftpx://e.com");
    }
}
