use std::fmt;

use shelf_store::{CatalogStore, JsonFileStore, StoreConfig};
use shelf_types::{Book, BookFields, ReadingProgress};
use tracing::{debug, info};

use crate::error::{LibraryError, LibraryResult};

/// A personal book collection bound to the store it persists to.
///
/// The collection is loaded once by [`Library::open`]. Each mutating method
/// writes the full collection back to the store before returning, and only
/// commits the change in memory if that write succeeded, so the in-memory
/// collection always mirrors the last successful save.
pub struct Library<S: CatalogStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: CatalogStore> fmt::Debug for Library<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books.len())
            .finish()
    }
}

impl Library<JsonFileStore> {
    /// Open the JSON catalog described by `config`.
    pub fn open_file(config: StoreConfig) -> LibraryResult<Self> {
        Self::open(JsonFileStore::new(config))
    }
}

impl<S: CatalogStore> Library<S> {
    /// Load the collection from `store`.
    pub fn open(store: S) -> LibraryResult<Self> {
        let books = store.load()?;
        debug!(count = books.len(), "library opened");
        Ok(Self { store, books })
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // ---- Queries ----

    /// Every record, in stored order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Records whose title or author contains `query`, ignoring case.
    ///
    /// The empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.matches(query)).collect()
    }

    /// The first record with exactly this title.
    pub fn find(&self, title: &str) -> LibraryResult<&Book> {
        self.books
            .iter()
            .find(|b| b.title == title)
            .ok_or_else(|| LibraryError::NotFound(title.to_string()))
    }

    /// All titles in stored order, duplicates included.
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.title.as_str()).collect()
    }

    pub fn progress(&self) -> ReadingProgress {
        ReadingProgress::from_books(&self.books)
    }

    // ---- Mutations ----

    /// Append a new record and persist.
    ///
    /// Fails with [`LibraryError::Validation`] if title, author or genre is
    /// empty. Duplicate titles are allowed.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: u32,
        read: bool,
    ) -> LibraryResult<&Book> {
        let book = BookFields::new(title, author, genre, year, read).into_book()?;

        self.books.push(book);
        if let Err(e) = self.store.save(&self.books) {
            self.books.pop();
            return Err(e.into());
        }

        let index = self.books.len() - 1;
        let added = &self.books[index];
        info!(title = %added.title, "book added");
        Ok(added)
    }

    /// Replace every attribute of the first record titled `title`, then
    /// persist.
    ///
    /// Only the first match in stored order is touched, even when several
    /// records share the title. The replacement values are not validated.
    pub fn update(&mut self, title: &str, fields: BookFields) -> LibraryResult<&Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.title == title)
            .ok_or_else(|| LibraryError::NotFound(title.to_string()))?;

        let previous = self.books[index].clone();
        self.books[index].overwrite(fields);
        if let Err(e) = self.store.save(&self.books) {
            self.books[index] = previous;
            return Err(e.into());
        }

        info!(title, new_title = %self.books[index].title, "book updated");
        Ok(&self.books[index])
    }

    /// Remove every record titled `title`, then persist.
    ///
    /// Returns the number of records removed. Unlike [`Library::update`],
    /// all matches are affected.
    pub fn remove(&mut self, title: &str) -> LibraryResult<usize> {
        let kept: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.title != title)
            .cloned()
            .collect();
        let removed = self.books.len() - kept.len();
        if removed == 0 {
            return Err(LibraryError::NotFound(title.to_string()));
        }

        self.store.save(&kept)?;
        self.books = kept;

        info!(title, removed, "book removed");
        Ok(removed)
    }

    // ---- Persistence ----

    /// Write the current collection to the store unchanged.
    pub fn save(&self) -> LibraryResult<()> {
        self.store.save(&self.books)?;
        Ok(())
    }
}
