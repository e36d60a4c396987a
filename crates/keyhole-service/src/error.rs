use keyhole_core::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for ShortenError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<StorageError> for ResolveError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
