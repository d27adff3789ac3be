//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// Status line and headers of a response, kept alongside settled results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: HashMap<String, String>,
}

impl ResponseMeta {
    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The `message` string of a JSON object body, if the body is one.
    ///
    /// Plain-text bodies, JSON arrays and objects whose `message` is missing,
    /// null or not a string all yield `None`.
    pub fn server_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(&self.body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }

    /// Status and headers without the body.
    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            status: self.status,
            headers: self.headers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    fn make_response_with_headers(
        status: u16,
        headers: Vec<(&str, &str)>,
        body: &[u8],
    ) -> Response {
        let headers: HashMap<String, String> = headers
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Response::new(status, headers, body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    // === Body Tests ===

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_response_json() {
        let resp = make_response(200, br#"["b", "a"]"#);
        let data: Vec<String> = resp.json().unwrap();
        assert_eq!(data, vec!["b", "a"]);
    }

    // === Server Message Tests ===

    #[test]
    fn test_server_message_present() {
        let resp = make_response(400, br#"{"message": "Email already in use"}"#);
        assert_eq!(resp.server_message().as_deref(), Some("Email already in use"));
    }

    #[test]
    fn test_server_message_absent_or_not_string() {
        assert_eq!(make_response(500, br#"{"error": "boom"}"#).server_message(), None);
        assert_eq!(make_response(500, br#"{"message": null}"#).server_message(), None);
        assert_eq!(make_response(500, br#"{"message": 7}"#).server_message(), None);
        assert_eq!(make_response(500, b"Internal Server Error").server_message(), None);
        assert_eq!(make_response(500, b"").server_message(), None);
    }

    // === Header Tests ===

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = make_response_with_headers(200, vec![("Content-Type", "text/html")], b"");
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_response_meta_drops_body() {
        let resp = make_response_with_headers(201, vec![("Location", "/api/orders/9")], b"ok");
        let meta = resp.meta();
        assert_eq!(meta.status, 201);
        assert!(meta.is_success());
        assert_eq!(meta.headers.get("Location").map(String::as_str), Some("/api/orders/9"));
    }
}
