/*!

# Bookshelf

A minimal [GraphQL][1] server built with [`juniper`] and [`axum`].

The schema declares a single `Book` interface with two implementers,
`Textbook` and `ColoringBook`, and a root `Query` exposing a `books` field:

```graphql
interface Book {
  title: String!
  author: String!
}

type Textbook implements Book {
  title: String!
  author: String!
  courses: [String!]!
  gradeLevel: Int
}

type ColoringBook implements Book {
  title: String!
  author: String!
  colors: [String!]!
}

type Query {
  books: [Book]
}
```

Books are served from an immutable in-memory [`Catalog`]. Every book in it
carries its concrete variant as a tag of the [`BookValue`] enum, so the
engine never has to guess a type while serializing. Untyped input is
classified once, on ingestion, by [`resolve_variant`].

## Running

```rust,no_run
use bookshelf::{serve, Catalog, Config};

# #[tokio::main]
# async fn main() {
if let Err(e) = serve(Config::default(), Catalog::new()).await {
    eprintln!("{e}");
}
# }
```

[1]: https://graphql.org

*/
pub mod catalog;
pub mod config;
mod error;
pub mod model;
pub mod resolve;
pub mod schema;
pub mod server;

#[doc(inline)]
pub use self::{
    catalog::Catalog,
    config::Config,
    error::Error,
    model::{Book, BookKind, BookValue, ColoringBook, Textbook},
    resolve::{resolve_variant, BookRecord, UnresolvedBook},
    schema::{schema, Query, Schema},
    server::{app, serve},
};
