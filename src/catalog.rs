//! Immutable in-memory book collection backing the `books` query.

use crate::{
    model::{BookValue, ColoringBook, Textbook},
    resolve::{BookRecord, UnresolvedBook},
};

/// Fixed, ordered collection of books.
///
/// Built once at startup and only ever read afterwards, so it can be shared
/// between requests without any locking. Acts as the [`juniper::Context`] of
/// the [`Schema`].
///
/// [`Schema`]: crate::Schema
#[derive(Clone, Debug)]
pub struct Catalog {
    books: Box<[BookValue]>,
}

impl juniper::Context for Catalog {}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates the [`Catalog`] with the bundled books.
    pub fn new() -> Self {
        Self {
            books: vec![
                Textbook {
                    title: "The Awakening".into(),
                    author: "Kate Chopin".into(),
                    courses: vec!["I Am".into(), "A college".into(), "TextBook".into()],
                    grade_level: Some(12),
                }
                .into(),
                ColoringBook {
                    title: "City of Glass".into(),
                    author: "Paul Auster".into(),
                    colors: vec!["Red".into(), "Orange".into()],
                }
                .into(),
            ]
            .into_boxed_slice(),
        }
    }

    /// Creates a [`Catalog`] out of untyped `records`, classifying each of
    /// them into its concrete variant.
    ///
    /// # Errors
    ///
    /// If any record resolves to no known variant. Nothing is served from a
    /// collection holding such a record.
    pub fn from_records<I>(records: I) -> Result<Self, UnresolvedBook>
    where
        I: IntoIterator<Item = BookRecord>,
    {
        let books = records
            .into_iter()
            .map(BookValue::try_from)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!("failed to ingest book record: {e}"))?;
        Ok(Self {
            books: books.into_boxed_slice(),
        })
    }

    /// Lists all the books, in insertion order.
    pub fn list_books(&self) -> &[BookValue] {
        tracing::debug!(count = self.books.len(), "listing books");
        &self.books
    }

    /// Number of books in this [`Catalog`].
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Indicates whether this [`Catalog`] holds no books at all.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
