//! HTTP request parser module.
//!
//! Turns the raw bytes read from a connection into an [`HttpRequest`]. The
//! parser is deliberately permissive and never returns an error.

mod request;
mod method;
mod tests;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;

// Re-export the parse_request function
pub use request::parse_request;
