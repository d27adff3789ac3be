//! HTTP request wrapper for the E-Shop storefront client.
//!
//! Every backend call goes through [`FetchClient`] and settles exactly once,
//! either as a [`Success`] carrying the payload and response metadata or as a
//! [`Failure`] carrying a reason that can be shown to the user:
//!
//! - transport failure (connection, unreadable body) →
//!   [`TRANSPORT_FAILURE_REASON`]
//! - non-2xx response → the body's `message`, else [`SERVER_FAILURE_REASON`]
//! - 2xx → parsed payload
//!
//! # Example
//!
//! ```rust,ignore
//! use eshop_data::{FetchClient, HttpTransport};
//!
//! let client = FetchClient::new(HttpTransport::new()?)
//!     .with_base_url("http://localhost:8080");
//!
//! let categories = client
//!     .get("/api/products/categories")
//!     .bearer_auth(token)
//!     .fetch_json::<Vec<String>>()
//!     .await?;
//! ```

mod error;
mod outcome;
mod request;
mod response;
mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::FetchError;
pub use outcome::{
    settle_json, settle_text, ApiResult, Failure, Success, SERVER_FAILURE_REASON,
    TRANSPORT_FAILURE_REASON,
};
pub use request::{Method, RequestBuilder, JSON_CONTENT_TYPE};
pub use response::{Response, ResponseMeta};
pub use transport::{HttpTransport, Transport};

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

/// HTTP client for the storefront backend.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a new client over the given transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client over an already shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
            error: None,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
    // Body serialization failures surface when the request is sent.
    error: Option<FetchError>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.builder = self.builder.text(text);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Self {
        match self.builder.clone().json(value) {
            Ok(builder) => self.builder = builder,
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// The request as it will be sent.
    pub fn describe(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the raw response.
    pub async fn send(self) -> Result<Response, FetchError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let method = self.builder.method;
        let url = self.builder.url.clone();
        tracing::debug!(%method, %url, "sending request");

        let result = self.transport.execute(self.builder).await;
        match &result {
            Ok(response) => tracing::debug!(%method, %url, status = response.status, "response received"),
            Err(e) => tracing::debug!(%method, %url, error = %e, "request failed"),
        }
        result
    }

    /// Send the request and settle it, parsing a 2xx body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        settle_json(self.send().await)
    }

    /// Send the request and settle it, keeping a 2xx body as raw text.
    pub async fn fetch_text(self) -> ApiResult<String> {
        settle_text(self.send().await)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiResult, Failure, FetchClient, FetchError, Method, Response, Success};
}

#[cfg(test)]
mod tests {
    use super::mock::{MockReply, MockTransport};
    use super::*;
    use serde_json::json;

    fn client(mock: MockTransport) -> (FetchClient, Arc<MockTransport>) {
        let mock = Arc::new(mock);
        let client = FetchClient::from_shared(mock.clone()).with_base_url("http://shop.test/");
        (client, mock)
    }

    #[tokio::test]
    async fn test_base_url_joined_and_defaults_applied() {
        let mock = MockTransport::new();
        mock.push(MockReply::json(200, json!(["a"])));
        let (client, mock) = client(mock);
        let client = client.with_default_header("X-Client", "eshop");

        let ok = client
            .get("/api/products/categories")
            .bearer_auth("t0k")
            .fetch_json::<Vec<String>>()
            .await
            .unwrap();
        assert_eq!(ok.payload, vec!["a"]);

        let sent = &mock.requests()[0];
        assert_eq!(sent.url, "http://shop.test/api/products/categories");
        assert_eq!(sent.header_value("Authorization"), Some("Bearer t0k"));
        assert_eq!(sent.header_value("X-Client"), Some("eshop"));
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let mock = MockTransport::new();
        mock.push(MockReply::text(200, ""));
        let (client, mock) = client(mock);

        client.get("https://other.test/ping").fetch_text().await.unwrap();
        assert_eq!(mock.requests()[0].url, "https://other.test/ping");
    }

    #[tokio::test]
    async fn test_settles_each_failure_class() {
        let mock = MockTransport::new();
        mock.push(MockReply::json(409, json!({"message": "X"})))
            .push(MockReply::json(500, json!({"error": "boom"})))
            .push(MockReply::fail("connection refused"));
        let (client, _) = client(mock);

        let rejected = client.post("/api/auth/signup").fetch_json::<serde_json::Value>().await;
        assert_eq!(rejected.unwrap_err().reason, "X");

        let generic = client.post("/api/auth/signup").fetch_json::<serde_json::Value>().await;
        assert_eq!(generic.unwrap_err().reason, SERVER_FAILURE_REASON);

        let transport = client.get("/api/products").fetch_json::<serde_json::Value>().await;
        let failure = transport.unwrap_err();
        assert_eq!(failure.reason, TRANSPORT_FAILURE_REASON);
        assert!(failure.response.is_none());
    }

    #[tokio::test]
    async fn test_routed_replies_match_method_and_path() {
        let mock = MockTransport::new();
        mock.route(Method::Get, "/api/products", MockReply::json(200, json!([])))
            .route(Method::Get, "/api/products/categories", MockReply::json(200, json!(["x"])));
        let (client, mock) = client(mock);

        let categories = client
            .get("/api/products/categories")
            .fetch_json::<Vec<String>>()
            .await
            .unwrap();
        assert_eq!(categories.payload, vec!["x"]);
        assert_eq!(mock.pending(), 1);
    }
}
