//! GraphQL types of the bookshelf: the [`Book`] interface and its implementers.

use derive_more::with_trait::Display;
use juniper::{GraphQLInterface, GraphQLObject};

/// A book of any kind.
///
/// Never constructed itself: values of this interface are carried by the
/// generated [`BookValue`] enum, which is tagged with the concrete variant at
/// the moment it is built.
#[derive(GraphQLInterface)]
#[graphql(for = [Textbook, ColoringBook])]
pub struct Book {
    /// The title of the book.
    pub title: String,

    /// The author of the book.
    pub author: String,
}

/// A book used in a course.
#[derive(Clone, Debug, Eq, GraphQLObject, PartialEq)]
#[graphql(impl = BookValue)]
pub struct Textbook {
    /// The title of the book.
    pub title: String,

    /// The author of the book.
    pub author: String,

    /// Courses this textbook is assigned to.
    pub courses: Vec<String>,

    /// Grade level the textbook targets, if any.
    pub grade_level: Option<i32>,
}

/// A book to color in.
#[derive(Clone, Debug, Eq, GraphQLObject, PartialEq)]
#[graphql(impl = BookValue)]
pub struct ColoringBook {
    /// The title of the book.
    pub title: String,

    /// The author of the book.
    pub author: String,

    /// Colors used throughout the book.
    pub colors: Vec<String>,
}

/// Name of a concrete [`Book`] variant.
///
/// Displays as the GraphQL object type name, which is the variant name itself.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum BookKind {
    /// [`Textbook`].
    Textbook,

    /// [`ColoringBook`].
    ColoringBook,
}

impl BookValue {
    /// Concrete variant this value is tagged with.
    pub fn kind(&self) -> BookKind {
        match self {
            Self::Textbook(_) => BookKind::Textbook,
            Self::ColoringBook(_) => BookKind::ColoringBook,
        }
    }

    /// Title shared by every variant.
    pub fn title(&self) -> &str {
        match self {
            Self::Textbook(b) => &b.title,
            Self::ColoringBook(b) => &b.title,
        }
    }

    /// Author shared by every variant.
    pub fn author(&self) -> &str {
        match self {
            Self::Textbook(b) => &b.author,
            Self::ColoringBook(b) => &b.author,
        }
    }
}
