use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Reading progress across a collection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// Number of records in the collection.
    pub total: usize,
    /// Number of records marked as read.
    pub read: usize,
    /// `read / total * 100`, or `0.0` for an empty collection.
    pub percent: f64,
}

impl ReadingProgress {
    /// Compute progress over a sequence of records.
    pub fn from_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let (total, read) = books
            .into_iter()
            .fold((0usize, 0usize), |(total, read), book| {
                (total + 1, read + usize::from(book.read))
            });
        Self::new(total, read)
    }

    pub fn new(total: usize, read: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };
        Self { total, read, percent }
    }

    /// Completion as a fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }

    /// Number of records not yet read.
    pub fn unread(&self) -> usize {
        self.total - self.read
    }

    /// `(total, read, percent)`.
    pub fn as_tuple(&self) -> (usize, usize, f64) {
        (self.total, self.read, self.percent)
    }
}
