//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// Content type sent with every JSON request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described outbound request: method, URL, headers and body.
///
/// Transports receive this value as-is; nothing is sent until a
/// [`Transport`](crate::Transport) executes it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| "text/plain".to_string());
        self.body = Some(text.into_bytes());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Get a header value (case-insensitive).
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON, mostly useful for inspecting recorded requests.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_auth_header_format() {
        let req = RequestBuilder::new(Method::Get, "/api/products").bearer_auth("abc.def");
        assert_eq!(req.header_value("authorization"), Some("Bearer abc.def"));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }

        let req = RequestBuilder::new(Method::Post, "/api/products")
            .json(&Body { name: "Lamp" })
            .unwrap();
        assert_eq!(req.header_value("Content-Type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(req.body_json().unwrap()["name"], "Lamp");
    }

    #[test]
    fn test_text_keeps_explicit_content_type() {
        let req = RequestBuilder::new(Method::Post, "/x")
            .header("Content-Type", "text/csv")
            .text("a,b");
        assert_eq!(req.header_value("content-type"), Some("text/csv"));
        assert_eq!(req.body.as_deref(), Some(&b"a,b"[..]));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Put.as_str(), "PUT");
    }
}
