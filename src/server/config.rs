//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use crate::server::docroot::PathPolicy;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Directory files are served from.
    pub doc_root: String,
    /// How request targets are checked against `doc_root`.
    pub path_policy: PathPolicy,
    /// The maximum number of connections served at once. 0 means no limit.
    pub max_connections: usize,
    /// Size of each read from a client socket.
    pub read_buffer_size: usize,
    /// Length of the pending-connection queue.
    pub backlog: u32,
}

impl ServerConfig {
    /// Configuration for serving `doc_root` on all interfaces at `port`.
    pub fn new(port: u16, doc_root: impl Into<String>) -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            doc_root: doc_root.into(),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            doc_root: ".".to_string(),
            path_policy: PathPolicy::Literal,
            max_connections: 1024,
            read_buffer_size: 1024,
            backlog: 5,
        }
    }
}
