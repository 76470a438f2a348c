//! Classification of untyped book records into concrete [`Book`] variants.
//!
//! [`Book`]: crate::model::Book

use derive_more::with_trait::{Display, Error};
use serde::Deserialize;

use crate::model::{BookKind, BookValue, ColoringBook, Textbook};

/// Book record of not yet known concrete shape, as received from untyped
/// input (JSON, for example).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Title of the book.
    pub title: String,

    /// Author of the book.
    pub author: String,

    /// Courses, present on textbooks only.
    #[serde(default)]
    pub courses: Option<Vec<String>>,

    /// Grade level, present on textbooks only.
    #[serde(default)]
    pub grade_level: Option<i32>,

    /// Colors, present on coloring books only.
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

/// Determines which [`BookKind`] the provided `record` is.
///
/// Checks are ordered and the first match wins: a non-empty `courses` makes a
/// [`Textbook`] even when `colors` is populated too. Returns [`None`] when no
/// variant matches.
pub fn resolve_variant(record: &BookRecord) -> Option<BookKind> {
    if is_populated(&record.courses) {
        Some(BookKind::Textbook)
    } else if is_populated(&record.colors) {
        Some(BookKind::ColoringBook)
    } else {
        None
    }
}

fn is_populated<T>(attr: &Option<Vec<T>>) -> bool {
    attr.as_ref().is_some_and(|v| !v.is_empty())
}

/// Error of a [`BookRecord`] matching none of the [`BookKind`]s.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Book \"{title}\" by {author} resolves to none of: Textbook, ColoringBook")]
pub struct UnresolvedBook {
    /// Title of the offending record.
    pub title: String,

    /// Author of the offending record.
    pub author: String,
}

impl TryFrom<BookRecord> for BookValue {
    type Error = UnresolvedBook;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let kind = resolve_variant(&record);
        let BookRecord {
            title,
            author,
            courses,
            grade_level,
            colors,
        } = record;

        match kind {
            Some(BookKind::Textbook) => Ok(Textbook {
                title,
                author,
                courses: courses.unwrap_or_default(),
                grade_level,
            }
            .into()),
            Some(BookKind::ColoringBook) => Ok(ColoringBook {
                title,
                author,
                colors: colors.unwrap_or_default(),
            }
            .into()),
            None => Err(UnresolvedBook { title, author }),
        }
    }
}
