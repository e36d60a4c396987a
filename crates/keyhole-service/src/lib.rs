//! Shortener and redirector services for keyhole.
//!
//! Validation and normalization live here, between the HTTP surface and
//! the store: the shortener applies the DNS reachability check before
//! creating a record, and the redirector turns lookups into normalized
//! redirect targets.

pub mod error;
pub mod redirector;
pub mod resolver;
pub mod shortener;

pub use error::{ResolveError, ShortenError};
pub use redirector::{Redirector, RedirectorService};
pub use resolver::{DnsResolver, HostResolver};
pub use shortener::{Shortened, Shortener, ShortenerService};
