//! The Shelf library.
//!
//! [`Library`] owns the in-memory book collection and the store it was
//! loaded from. It is the main entry point for front ends: every user-facing
//! operation is a method on it, and every mutation is persisted before the
//! method returns.

pub mod error;
pub mod library;

pub use error::{LibraryError, LibraryResult};
pub use library::Library;

// Re-export key types
pub use shelf_store::{
    CatalogStore, InMemoryCatalogStore, JsonFileStore, LoadPolicy, StoreConfig, StoreError,
};
pub use shelf_types::{Book, BookFields, ReadingProgress, TypeError};
