//! Core types and traits for the keyhole URL shortener.
//!
//! This crate provides the shared types and contracts used by the
//! storage backends, the shortener service, and the redirector service.

pub mod error;
pub mod repository;
pub mod short_id;

pub use error::{CoreError, StorageError};
pub use repository::{Repository, ShortUrlRecord, UrlStore};
pub use short_id::ShortId;
