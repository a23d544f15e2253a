//! Error taxonomy for store operations

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the event store
///
/// `InvalidArgument` is malformed input, `NotFound` a stale reference; the
/// transport maps them to distinct status codes so callers can tell them
/// apart. `Storage` failures are never retried here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[source] std::io::Error),

    #[error("storage failure: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Storage(e)
    }
}

impl StoreError {
    /// True for the storage-failure variants
    pub fn is_storage(&self) -> bool {
        matches!(self, StoreError::Storage(_) | StoreError::Encoding(_))
    }
}
