use std::path::PathBuf;

/// Errors from catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while encoding the catalog.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The catalog file exists but cannot be decoded.
    #[error("corrupt catalog {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The temporary file could not be moved over the catalog.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An in-memory lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
