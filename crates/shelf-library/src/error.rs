use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// A required field was empty; nothing was changed.
    #[error("validation failed: {0}")]
    Validation(#[from] shelf_types::TypeError),

    /// No record has the requested title; nothing was changed.
    #[error("book not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] shelf_store::StoreError),
}

impl LibraryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
