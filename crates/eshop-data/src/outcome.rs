//! The settled result of one request: a payload or a displayable reason.

use serde::de::DeserializeOwned;

use crate::{FetchError, Response, ResponseMeta};

/// Reason given when the request never produced a usable response.
pub const TRANSPORT_FAILURE_REASON: &str = "Some error occurred. Please try again.";

/// Reason given for a non-2xx response that carries no `message`.
pub const SERVER_FAILURE_REASON: &str = "Server error occurred.";

/// Successful settlement.
#[derive(Debug, Clone)]
pub struct Success<T> {
    /// Parsed body (or synthesized message, for text endpoints).
    pub payload: T,
    /// Status and headers of the response.
    pub response: ResponseMeta,
}

impl<T> Success<T> {
    /// Replace the payload, keeping the response metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            payload: f(self.payload),
            response: self.response,
        }
    }
}

/// Failed settlement with a reason suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Failure {
    pub reason: String,
    /// `None` when the request failed before a response arrived.
    pub response: Option<ResponseMeta>,
}

impl Failure {
    /// Failure for a request that produced no usable response.
    pub fn transport(response: Option<ResponseMeta>) -> Self {
        Self {
            reason: TRANSPORT_FAILURE_REASON.to_string(),
            response,
        }
    }

    /// Failure for a non-2xx response.
    pub fn rejected(response: &Response) -> Self {
        Self {
            reason: response
                .server_message()
                .unwrap_or_else(|| SERVER_FAILURE_REASON.to_string()),
            response: Some(response.meta()),
        }
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }

    /// True when the request never reached a response.
    pub fn is_transport(&self) -> bool {
        self.response.is_none()
    }
}

/// Result of a settled request.
pub type ApiResult<T> = Result<Success<T>, Failure>;

/// Settle a transport result whose success body is JSON.
pub fn settle_json<T: DeserializeOwned>(result: Result<Response, FetchError>) -> ApiResult<T> {
    let response = settle_status(result)?;
    match response.json::<T>() {
        Ok(payload) => Ok(Success {
            payload,
            response: response.meta(),
        }),
        Err(e) => {
            tracing::warn!(status = response.status, error = %e, "unparseable success body");
            Err(Failure::transport(Some(response.meta())))
        }
    }
}

/// Settle a transport result whose success body is consumed as raw text.
pub fn settle_text(result: Result<Response, FetchError>) -> ApiResult<String> {
    let response = settle_status(result)?;
    match response.text() {
        Ok(payload) => Ok(Success {
            payload,
            response: response.meta(),
        }),
        Err(e) => {
            tracing::warn!(status = response.status, error = %e, "unreadable success body");
            Err(Failure::transport(Some(response.meta())))
        }
    }
}

fn settle_status(result: Result<Response, FetchError>) -> Result<Response, Failure> {
    match result {
        Err(e) => {
            tracing::warn!(error = %e, "request failed before a response arrived");
            Err(Failure::transport(None))
        }
        Ok(response) if !response.is_success() => {
            let failure = Failure::rejected(&response);
            tracing::warn!(status = response.status, reason = %failure.reason, "request rejected");
            Err(failure)
        }
        Ok(response) => Ok(response),
    }
}
