use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A required text field was empty.
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
