//! HTTP response types and utilities.

use std::collections::HashMap;

/// Protocol version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Value of the `Server` header carried by every response.
pub const SERVER_NAME: &str = "TritonHTTP/1.1";

/// File extensions with a known content type. Anything else is sent without
/// a `Content-Type` header.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("jpg", "image/jpg"),
    ("png", "image/png"),
];

/// The status codes this server can produce, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Forbidden = 403,
    NotFound = 404,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// The numeric code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            400 => Ok(StatusCode::BadRequest),
            403 => Ok(StatusCode::Forbidden),
            404 => Ok(StatusCode::NotFound),
            other => Err(other),
        }
    }
}

/// Returns the part of `file_name` after its last '.', or "" if it has none.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

/// Looks up the content type for a file extension.
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

/// Represents an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body, empty unless `status` is 200
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a complete response.
    ///
    /// Every response gets a `Server` header. A 200 response also gets a
    /// `Content-Length` and, when the extension of `file_name` is known, a
    /// `Content-Type`. Any other status discards `body`.
    ///
    /// # Arguments
    ///
    /// * `status` - The status code
    /// * `body` - The file contents for a 200 response
    /// * `file_name` - Name of the file the body was read from
    pub fn build(status: StatusCode, body: Vec<u8>, file_name: Option<&str>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Server".to_string(), SERVER_NAME.to_string());

        if status != StatusCode::Ok {
            return Self {
                status,
                headers,
                body: Vec::new(),
            };
        }

        let extension = file_name.map_or("", file_extension);
        if let Some(content_type) = content_type_for(extension) {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }
        headers.insert("Content-Length".to_string(), body.len().to_string());

        Self {
            status,
            headers,
            body,
        }
    }

    /// A bodiless response with the given status.
    pub fn status_only(status: StatusCode) -> Self {
        Self::build(status, Vec::new(), None)
    }

    /// A 200 response carrying the contents of `file_name`.
    pub fn file(body: Vec<u8>, file_name: &str) -> Self {
        Self::build(StatusCode::Ok, body, Some(file_name))
    }

    /// Get a header value.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The status line, without its trailing CRLF.
    pub fn status_line(&self) -> String {
        format!(
            "{HTTP_VERSION} {code} {reason}",
            code = self.status.as_u16(),
            reason = self.status.reason_phrase()
        )
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(128 + self.body.len());

        // Add the status line
        bytes.extend_from_slice(self.status_line().as_bytes());
        bytes.extend_from_slice(b"\r\n");

        // Add the headers
        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }
}

/// Parse a status line such as `HTTP/1.1 404 Not Found`.
///
/// Returns the status code and reason phrase, or `None` if the line is not a
/// status line for one of the codes this server produces.
pub fn parse_status_line(line: &str) -> Option<(StatusCode, &str)> {
    let line = line.strip_suffix("\r\n").unwrap_or(line);
    let (version, rest) = line.split_once(' ')?;
    if !version.starts_with("HTTP/") {
        return None;
    }
    let (code, reason) = rest.split_once(' ')?;
    let status = StatusCode::try_from(code.parse::<u16>().ok()?).ok()?;
    Some((status, reason))
}
