//! Error types for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
///
/// Client mistakes never show up here: they are answered with a 400 or 404
/// response instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be created.
    #[error("Error creating socket: {0}")]
    Socket(#[source] std::io::Error),

    /// The listening socket could not be bound to the configured address.
    #[error("Error binding socket to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The bound socket could not start listening.
    #[error("Error listening for connections: {0}")]
    Listen(#[source] std::io::Error),

    /// Reading the request from a client failed.
    #[error("Error reading request from client: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the response to a client failed.
    #[error("Error writing response to client: {0}")]
    Write(#[source] std::io::Error),

    /// Other I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
