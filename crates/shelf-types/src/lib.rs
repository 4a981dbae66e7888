//! Foundation types for Shelf, a personal library catalog.
//!
//! This crate provides the record types shared by every other Shelf crate.
//! It performs no I/O.
//!
//! # Key Types
//!
//! - [`Book`] -- One catalog record (title, author, genre, year, read flag)
//! - [`BookFields`] -- Replacement values applied by an update
//! - [`ReadingProgress`] -- Total/read counts and completion percentage
//! - [`TypeError`] -- Presence-check failures

pub mod book;
pub mod error;
pub mod progress;

pub use book::{Book, BookFields};
pub use error::{TypeError, TypeResult};
pub use progress::ReadingProgress;
