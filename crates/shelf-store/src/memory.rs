use std::sync::RwLock;

use shelf_types::Book;

use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStore;

/// In-memory catalog store.
///
/// Intended for tests and embedding. The last saved collection is held
/// behind a `RwLock`; data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    books: RwLock<Vec<Book>>,
    saves: RwLock<usize>,
}

impl InMemoryCatalogStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `books`, as if saved earlier.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
            saves: RwLock::new(0),
        }
    }

    /// Number of times [`CatalogStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|n| *n).unwrap_or_default()
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> StoreResult<Vec<Book>> {
        self.load()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        let books = self
            .books
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(books.clone())
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let mut stored = self
            .books
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        *stored = books.to_vec();

        let mut saves = self
            .saves
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        *saves += 1;
        Ok(())
    }
}
