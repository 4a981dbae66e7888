use shelf_types::Book;

use crate::error::StoreResult;

/// Whole-collection catalog persistence.
///
/// All implementations must satisfy these invariants:
/// - `load` returns records in the order they were last saved.
/// - `save` replaces the entire stored collection; nothing from the previous
///   save survives.
/// - A catalog that was never saved loads as an empty collection.
pub trait CatalogStore: Send + Sync {
    /// Read the full collection.
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn load(&self) -> StoreResult<Vec<Book>> {
        (**self).load()
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        (**self).save(books)
    }
}
