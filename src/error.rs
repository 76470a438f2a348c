//! Errors of running the bookshelf server.

use std::{io, net::SocketAddr};

use derive_more::with_trait::Display;

/// Error failing the whole server.
#[derive(Debug, Display, derive_more::with_trait::Error)]
pub enum Error {
    /// Listener could not be bound to the configured address.
    #[display("failed to listen on {addr}: {source}")]
    Bind {
        /// Address the listener was bound to.
        addr: SocketAddr,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serving connections failed.
    #[display("failed to serve HTTP: {_0}")]
    Serve(io::Error),
}
