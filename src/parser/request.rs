//! HTTP request parsing and representation.

use std::collections::HashMap;

use crate::parser::method::Method;

/// Represents a parsed HTTP request.
///
/// Every request-line token is optional: a short or empty request line leaves
/// the missing tokens as `None` instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Option<Method>,
    /// The request target, exactly as sent by the client
    pub target: Option<String>,
    /// The protocol version token, unvalidated
    pub version: Option<String>,
    /// The HTTP headers. Values keep everything after the colon, including
    /// any leading space.
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name, matched exactly as received
    ///
    /// # Returns
    ///
    /// The header value, if the header was present. A present header with an
    /// empty value yields `Some("")`.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Returns true if the request line carried the GET method.
    pub fn is_get(&self) -> bool {
        self.method.as_ref().is_some_and(Method::is_get)
    }

    /// The request target, or the empty string when the request line had none.
    pub fn target_or_empty(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }
}

/// Parse an HTTP request from a byte slice.
///
/// Parsing is total: malformed input produces a request whose missing parts
/// are `None` or absent from the header map. Anything after the blank line
/// ending the header block is ignored.
///
/// # Arguments
///
/// * `input` - The bytes read from the connection so far
///
/// # Returns
///
/// The best-effort parsed HTTP request
pub fn parse_request(input: &[u8]) -> HttpRequest {
    let input_str = String::from_utf8_lossy(input);
    // CR is dropped along with LF, so header values do not end in '\r'
    let mut lines = input_str.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let mut request = HttpRequest::default();

    // Request line: method, target, version. Extra tokens are ignored.
    if let Some(request_line) = lines.next() {
        let mut parts = request_line.split_whitespace();
        request.method = parts.next().map(Method::from);
        request.target = parts.next().map(str::to_string);
        request.version = parts.next().map(str::to_string);
    }

    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        // Lines without a colon are skipped; a repeated name overwrites the previous value
        if let Some((name, value)) = line.split_once(':') {
            request.headers.insert(name.to_string(), value.to_string());
        }
    }

    request
}
