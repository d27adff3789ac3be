//! Transports that execute a [`RequestBuilder`] and return a raw [`Response`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::{FetchError, Method, RequestBuilder, Response};

/// Executes one request. Implementations perform exactly one exchange and
/// never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Network transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Default total request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a transport with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom total timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}
