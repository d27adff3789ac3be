//! Scripted in-memory transport.
//!
//! Replies are consumed in the order they were scripted. A reply scripted
//! with [`MockTransport::route`] only answers a request with the same method
//! whose URL ends with the given path, so concurrent callers receive the
//! reply meant for them regardless of polling order.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{FetchError, Method, RequestBuilder, Response, Transport};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A response with the given status and body.
    Respond(Response),
    /// A transport-level failure.
    Fail(String),
}

impl MockReply {
    /// A JSON response.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        MockReply::Respond(Response::new(status, headers, body.to_string().into_bytes()))
    }

    /// A plain-text response.
    pub fn text(status: u16, body: &str) -> Self {
        MockReply::Respond(Response::new(
            status,
            HashMap::new(),
            body.as_bytes().to_vec(),
        ))
    }

    /// A connection failure.
    pub fn fail(message: &str) -> Self {
        MockReply::Fail(message.to_string())
    }
}

#[derive(Debug)]
struct Scripted {
    route: Option<(Method, String)>,
    reply: MockReply,
}

/// Transport that answers from a script and records every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<Vec<Scripted>>,
    requests: Mutex<Vec<RequestBuilder>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a reply for the next request, whatever it is.
    pub fn push(&self, reply: MockReply) -> &Self {
        self.lock_script().push(Scripted { route: None, reply });
        self
    }

    /// Script a reply for the next request matching `method` and `path`.
    pub fn route(&self, method: Method, path: &str, reply: MockReply) -> &Self {
        self.lock_script().push(Scripted {
            route: Some((method, path.to_string())),
            reply,
        });
        self
    }

    /// All requests executed so far, in order.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of scripted replies not yet consumed.
    pub fn pending(&self) -> usize {
        self.lock_script().len()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, Vec<Scripted>> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let reply = {
            let mut script = self.lock_script();
            let position = script.iter().position(|s| match &s.route {
                Some((method, path)) => *method == request.method && request.url.ends_with(path),
                None => true,
            });
            position.map(|i| script.remove(i).reply)
        };

        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(message)) => Err(FetchError::RequestError(message)),
            None => Err(FetchError::RequestError(format!(
                "no scripted reply for {} {}",
                request.method, request.url
            ))),
        }
    }
}
