use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TypeError, TypeResult};

/// A single catalog record.
///
/// The title is the de-facto lookup key but is not unique: several records
/// may share a title. Field order here is the field order in the catalog
/// file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publication year. Unsigned, so a negative year cannot be represented.
    /// Integral floats such as `1937.0` are accepted on input.
    #[serde(deserialize_with = "deserialize_year")]
    pub year: u32,
    /// Whether the book has been read. Absent in older files means unread.
    #[serde(default)]
    pub read: bool,
}

impl Book {
    /// Create a record without checking required fields.
    ///
    /// Use [`Book::validate`] (or [`BookFields::into_book`]) when the values
    /// come from user input.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: u32,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            read,
        }
    }

    /// Check that title, author and genre are non-empty.
    ///
    /// Only emptiness is checked; a title of a single space is accepted.
    pub fn validate(&self) -> TypeResult<()> {
        require("title", &self.title)?;
        require("author", &self.author)?;
        require("genre", &self.genre)?;
        Ok(())
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// The empty query is a substring of every string, so it matches every
    /// record.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
    }

    /// Replace every attribute with the given values.
    pub fn overwrite(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.genre = fields.genre;
        self.year = fields.year;
        self.read = fields.read;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}, {})", self.title, self.author, self.genre, self.year)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(u32),
    Float(f64),
}

fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match RawYear::deserialize(deserializer)? {
        RawYear::Int(year) => Ok(year),
        RawYear::Float(f) if f.is_finite() && f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
            Ok(f as u32)
        }
        RawYear::Float(f) => Err(serde::de::Error::custom(format!(
            "year must be a non-negative whole number, got {f}"
        ))),
    }
}

fn require(field: &'static str, value: &str) -> TypeResult<()> {
    if value.is_empty() {
        return Err(TypeError::MissingField(field));
    }
    Ok(())
}

/// Replacement values for an existing record.
///
/// All five attributes are replaced together; there is no partial update at
/// this level. Callers that only want to change some fields start from
/// `BookFields::from(&current)` and edit the copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: u32,
    pub read: bool,
}

impl BookFields {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: u32,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            read,
        }
    }

    /// Build a validated [`Book`] from these fields.
    pub fn into_book(self) -> TypeResult<Book> {
        let book = Book::new(self.title, self.author, self.genre, self.year, self.read);
        book.validate()?;
        Ok(book)
    }
}

impl From<&Book> for BookFields {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: book.year,
            read: book.read,
        }
    }
}
