//! HTTP file server.
//!
//! One task per accepted connection: the request is read and parsed, its
//! target is checked against the document root, and the file (or an error
//! status) is written back before the connection is closed.

mod response;
mod config;
mod connection;
mod docroot;
mod error;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode, HTTP_VERSION, SERVER_NAME, parse_status_line};
pub use config::ServerConfig;
pub use connection::{handle_connection, read_request, respond};
pub use docroot::{DocumentRoot, PathPolicy, DEFAULT_DOCUMENT, is_valid};
pub use error::Error;
pub use http_server::HttpServer;
