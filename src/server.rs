//! HTTP transport of the bookshelf, built on [`axum`].

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use juniper_axum::{extract::JuniperRequest, graphiql, response::JuniperResponse};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    catalog::Catalog,
    config::Config,
    error::Error,
    schema::{schema, Schema},
};

/// Path GraphQL requests are served on.
pub const GRAPHQL_ENDPOINT: &str = "/";

/// Path the GraphiQL IDE is served on.
pub const GRAPHIQL_ENDPOINT: &str = "/graphiql";

/// Builds the [`Router`] serving the provided `schema` over the `catalog`.
///
/// GraphQL requests are accepted on [`GRAPHQL_ENDPOINT`] either as `GET`
/// with the request in the query string, or as `POST` with an
/// `application/json` (single or batch) or `application/graphql` body.
pub fn app(schema: Arc<Schema>, catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route(GRAPHQL_ENDPOINT, get(graphql).post(graphql))
        .route(GRAPHIQL_ENDPOINT, get(graphiql(GRAPHQL_ENDPOINT, None)))
        .layer(Extension(schema))
        .layer(Extension(catalog))
        .layer(TraceLayer::new_for_http())
}

async fn graphql(
    Extension(schema): Extension<Arc<Schema>>,
    Extension(catalog): Extension<Arc<Catalog>>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse(request.execute(&*schema, &*catalog).await)
}

/// Serves the `catalog` on the address from the provided `config` until a
/// shutdown signal is received.
///
/// # Errors
///
/// If the listener cannot be bound, or serving connections fails.
pub async fn serve(config: Config, catalog: Catalog) -> Result<(), Error> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    tracing::info!(%addr, books = catalog.len(), "Server ready at: {}", config.url());

    axum::serve(listener, app(Arc::new(schema()), Arc::new(catalog)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves once Ctrl-C (or `SIGTERM` on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for `SIGTERM`: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
