//! Root GraphQL types of the bookshelf.

use juniper::{graphql_object, EmptyMutation, EmptySubscription, RootNode};

use crate::{catalog::Catalog, model::BookValue};

/// Root query object of the schema.
#[derive(Clone, Copy, Debug)]
pub struct Query;

#[graphql_object(context = Catalog)]
impl Query {
    /// All the books on the shelf.
    fn books(context: &Catalog) -> Option<Vec<Option<BookValue>>> {
        Some(context.list_books().iter().cloned().map(Some).collect())
    }
}

/// Bookshelf GraphQL schema.
pub type Schema = RootNode<'static, Query, EmptyMutation<Catalog>, EmptySubscription<Catalog>>;

/// Creates a new [`Schema`].
pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}
