//! A minimal HTTP/1.1 static file server.
//!
//! Each accepted connection carries exactly one request. The request target is
//! mapped onto a document root and the file is returned with a `200 OK`, or the
//! connection gets `400 Bad Request` (method other than GET) or `404 Not Found`
//! (unsafe target, missing or unreadable file). The connection is then closed.
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use tritonhttp::{parse_request, Method};
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n");
//!
//! assert_eq!(request.method, Some(Method::GET));
//! assert_eq!(request.target.as_deref(), Some("/index.html"));
//! // Header values keep everything after the colon
//! assert_eq!(request.get_header("Host"), Some(" example.com"));
//! ```
//!
//! ## Building a response
//!
//! ```
//! use tritonhttp::{HttpResponse, StatusCode};
//!
//! let response = HttpResponse::file(b"<h1>hi</h1>".to_vec(), "index.html");
//! assert_eq!(response.status, StatusCode::Ok);
//! assert_eq!(response.get_header("Content-Type"), Some("text/html"));
//! assert_eq!(response.get_header("Content-Length"), Some("11"));
//!
//! let missing = HttpResponse::status_only(StatusCode::NotFound);
//! assert!(missing.body.is_empty());
//! assert_eq!(missing.get_header("Content-Length"), None);
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use tritonhttp::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tritonhttp::ServerError> {
//!     let server = HttpServer::bind(ServerConfig::new(8080, "./www")).await?;
//!     server.run().await;
//!     Ok(())
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{HttpRequest, Method, parse_request};
pub use server::{
    DocumentRoot, Error as ServerError, HttpResponse, HttpServer, PathPolicy, ServerConfig,
    StatusCode,
};
