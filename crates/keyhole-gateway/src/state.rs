use keyhole_core::Repository;
use keyhole_service::{
    DnsResolver, HostResolver, Redirector, RedirectorService, Shortener, ShortenerService,
};
use keyhole_storage::{HexIdGenerator, RecordStore};
use std::sync::Arc;

/// Shared application state: the two service seams behind trait objects.
#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, redirector: Arc<dyn Redirector>) -> Self {
        Self {
            shortener,
            redirector,
        }
    }

    /// Wires the default service stack over the given backend: random
    /// hex identifiers and the system DNS resolver.
    pub fn with_repository<R: Repository>(repository: R) -> Self {
        Self::with_repository_and_resolver(repository, DnsResolver)
    }

    /// Same as [`Self::with_repository`] with an explicit resolver;
    /// lets tests stay off the network.
    pub fn with_repository_and_resolver<R, H>(repository: R, resolver: H) -> Self
    where
        R: Repository,
        H: HostResolver,
    {
        let store = RecordStore::new(repository, HexIdGenerator);
        let shortener = ShortenerService::new(store.clone(), resolver);
        let redirector = RedirectorService::new(store);
        Self::new(Arc::new(shortener), Arc::new(redirector))
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }
}
