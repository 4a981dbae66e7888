//! Catalog persistence for Shelf.
//!
//! A catalog is persisted as a whole: every save rewrites the full
//! collection, every load reads it back in stored order. There is no
//! incremental update and no cross-process locking; the last writer wins.
//!
//! # Storage Backends
//!
//! All backends implement the [`CatalogStore`] trait:
//!
//! - [`JsonFileStore`] -- a single pretty-printed JSON array on disk
//! - [`InMemoryCatalogStore`] -- `Vec`-backed store for tests and embedding
//!
//! # Design Rules
//!
//! 1. A missing catalog is an empty catalog, never an error.
//! 2. An unparsable catalog is handled according to [`LoadPolicy`].
//! 3. Saves replace the file atomically (temp file + rename).
//! 4. Write errors are always propagated.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use config::{LoadPolicy, StoreConfig, DEFAULT_CATALOG_FILE};
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryCatalogStore;
pub use traits::CatalogStore;
