use thiserror::Error;

/// Failures raised by a [`crate::store::KeyValueStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Backend(String),
}

/// Why a persisted value could not be used.
///
/// The non-raising loaders in [`crate::models::storage`] turn every one of
/// these into a fallback value; the `try_*` variants hand them to the caller.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("No value stored under '{0}'")]
    Missing(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored snippets are unusable: {0}")]
    Import(#[from] crate::models::ImportError),

    #[error("Stored snippets contain no valid records")]
    Empty,
}

pub type Result<T> = std::result::Result<T, StoreError>;
