//! Tests for the HTTP request parser.

#[cfg(test)]
mod tests {
    use crate::parser::{HttpRequest, Method, parse_request};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.method, Some(Method::GET));
        assert_eq!(result.target.as_deref(), Some("/index.html"));
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
        assert_eq!(result.get_header("Host"), Some(" example.com"));
        assert!(result.is_get());
    }

    #[test]
    fn test_header_value_keeps_leading_space() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Tight:value\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.get_header("Host"), Some(" example.com"));
        assert_eq!(result.get_header("X-Tight"), Some("value"));
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.headers.len(), 3);
        assert_eq!(result.get_header("User-Agent"), Some(" test"));
        assert_eq!(result.get_header("Accept"), Some(" */*"));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let request = b"GET / HTTP/1.1\r\nX-Dup: first\r\nX-Dup: second\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.get_header("X-Dup"), Some(" second"));
        assert_eq!(result.headers.len(), 1);
    }

    #[test]
    fn test_header_lookup_is_exact() {
        let request = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(result.has_header("Host"));
        assert!(!result.has_header("host"));
    }

    #[test]
    fn test_line_without_colon_is_skipped() {
        let request = b"GET /index.html HTTP/1.1\r\nInvalidHeader\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.headers.len(), 1);
        assert_eq!(result.get_header("Host"), Some(" example.com"));
    }

    #[test]
    fn test_headers_with_multiple_colons() {
        let request = b"GET /index.html HTTP/1.1\r\nX-Test: value:with:colons\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.get_header("X-Test"), Some(" value:with:colons"));
    }

    #[test]
    fn test_empty_header_value_is_distinct_from_absent() {
        let request = b"GET / HTTP/1.1\r\nX-Empty:\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.get_header("X-Empty"), Some(""));
        assert_eq!(result.get_header("X-Missing"), None);
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request(b"");
        assert_eq!(result, HttpRequest::default());
        assert_eq!(result.target_or_empty(), "");
        assert!(!result.is_get());
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\n\r\n");
        assert_eq!(result.method, Some(Method::GET));
        assert_eq!(result.target, None);
        assert_eq!(result.version, None);
    }

    #[test]
    fn test_extra_request_line_tokens_are_ignored() {
        let result = parse_request(b"GET /a.html HTTP/1.1 trailing junk\r\n\r\n");
        assert_eq!(result.target.as_deref(), Some("/a.html"));
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_version_is_not_validated() {
        let result = parse_request(b"GET /index.html HTTP/9.9\r\n\r\n");
        assert_eq!(result.version.as_deref(), Some("HTTP/9.9"));
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let result = parse_request(b"BREW /pot HTTP/1.1\r\n\r\n");
        assert_eq!(result.method, Some(Method::Other("BREW".to_string())));
        assert!(!result.is_get());
    }

    #[test]
    fn test_all_methods() {
        let methods = vec![
            ("GET", Method::GET),
            ("HEAD", Method::HEAD),
            ("POST", Method::POST),
            ("PUT", Method::PUT),
            ("DELETE", Method::DELETE),
            ("OPTIONS", Method::OPTIONS),
            ("PATCH", Method::PATCH),
        ];

        for (token, expected_method) in methods {
            let request = format!("{token} /index.html HTTP/1.1\r\n\r\n");
            let result = parse_request(request.as_bytes());
            assert_eq!(result.method, Some(expected_method));
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::PATCH.to_string(), "PATCH");
        assert_eq!(Method::Other("get".to_string()).to_string(), "get");
    }

    #[test]
    fn test_method_is_case_sensitive() {
        assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    }

    #[test]
    fn test_mixed_line_endings() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\nUser-Agent: test\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
        assert_eq!(result.get_header("Host"), Some(" example.com"));
        assert_eq!(result.get_header("User-Agent"), Some(" test"));
    }

    #[test]
    fn test_request_line_with_extra_whitespace() {
        let request = b"GET  /index.html \t HTTP/1.1\r\n\r\n";
        let result = parse_request(request);
        assert_eq!(result.method, Some(Method::GET));
        assert_eq!(result.target.as_deref(), Some("/index.html"));
        assert_eq!(result.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_bytes_after_header_block_are_ignored() {
        let request = b"GET / HTTP/1.1\r\nHost: a\r\n\r\nX-Body: not-a-header\r\n";
        let result = parse_request(request);
        assert!(result.has_header("Host"));
        assert!(!result.has_header("X-Body"));
    }

    #[test]
    fn test_headers_without_terminator() {
        let result = parse_request(b"GET / HTTP/1.1\r\nHost: a\r\nAccept: b");
        assert_eq!(result.get_header("Accept"), Some(" b"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let result = parse_request(b"GET /caf\xff.html HTTP/1.1\r\n\r\n");
        assert_eq!(result.method, Some(Method::GET));
        assert_eq!(result.target.as_deref(), Some("/caf\u{FFFD}.html"));
    }

    #[test]
    fn test_header_value_has_no_trailing_carriage_return() {
        let result = parse_request(b"GET / HTTP/1.1\r\nHost: example.com\r\nX-Last:tail\r\n\r\n");
        assert_eq!(result.get_header("Host"), Some(" example.com"));
        assert_eq!(result.get_header("X-Last"), Some("tail"));
    }
}
