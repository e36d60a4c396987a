use crate::error::ShortenError;
use crate::resolver::{host_portion, HostResolver};
use async_trait::async_trait;
use keyhole_core::{ShortId, UrlStore};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    /// The raw URL exactly as submitted.
    pub original_url: String,
    /// The generated identifier.
    pub short_id: ShortId,
}

/// Submission side of the service: validate, then create.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `raw_url` by resolving its host, then persists a new
    /// record for it.
    async fn submit(&self, raw_url: &str) -> Result<Shortened, ShortenError>;
}

/// A concrete implementation of the [`Shortener`] trait.
///
/// Wraps a [`UrlStore`] and a [`HostResolver`]. Validation is a
/// reachability check, not a syntax check: a well-formed URL whose host
/// does not currently resolve is rejected exactly like a malformed
/// string. No scheme normalization happens before validation.
#[derive(Debug)]
pub struct ShortenerService<S, H> {
    store: Arc<S>,
    resolver: Arc<H>,
}

impl<S: UrlStore, H: HostResolver> ShortenerService<S, H> {
    /// Creates a new `ShortenerService` over the given store and resolver.
    pub fn new(store: S, resolver: H) -> Self {
        Self {
            store: Arc::new(store),
            resolver: Arc::new(resolver),
        }
    }
}

#[async_trait]
impl<S: UrlStore, H: HostResolver> Shortener for ShortenerService<S, H> {
    async fn submit(&self, raw_url: &str) -> Result<Shortened, ShortenError> {
        let host = host_portion(raw_url);
        if host.is_empty() {
            return Err(ShortenError::InvalidUrl(raw_url.to_string()));
        }

        if self.resolver.lookup(host).await.is_none() {
            debug!(host, "host did not resolve, rejecting submission");
            return Err(ShortenError::InvalidUrl(raw_url.to_string()));
        }

        let record = self.store.create(raw_url).await?;

        Ok(Shortened {
            original_url: record.target_url,
            short_id: record.id,
        })
    }
}
