//! HTTP request methods.

use std::fmt;

/// HTTP request methods as they appear on the request line.
///
/// Parsing a method never fails: tokens that are not one of the standard
/// methods are kept verbatim in [`Method::Other`]. Only [`Method::GET`] is
/// served; every other method is answered with `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: Requests a representation of the specified resource.
    GET,
    /// HEAD method: Same as GET but only transfers the status line and header section.
    HEAD,
    /// POST method: Submits data to be processed to the identified resource.
    POST,
    /// PUT method: Replaces all current representations of the target resource.
    PUT,
    /// DELETE method: Deletes the specified resource.
    DELETE,
    /// OPTIONS method: Describes the communication options for the target resource.
    OPTIONS,
    /// PATCH method: Applies partial modifications to a resource.
    PATCH,
    /// Any other token, exactly as received.
    Other(String),
}

impl Method {
    /// Returns true for the only method this server serves.
    pub fn is_get(&self) -> bool {
        matches!(self, Method::GET)
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Other(token) => f.write_str(token),
            known => write!(f, "{known:?}"),
        }
    }
}
