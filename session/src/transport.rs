//! HTTP seam between the session state machine and a concrete client.
//!
//! ARCHITECTURE
//! ============
//! The browser implements [`Transport`] with `gloo-net`, the CLI with
//! `reqwest`, and tests with scripted fakes. Implementations must send
//! credentials (cookies) with every request and enforce the configured
//! request timeout, reporting it as [`TransportError::Timeout`].
//!
//! Non-2xx statuses are NOT transport errors: the authority answers rejected
//! logins with a JSON body, and that body still has to be interpreted.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde_json::Value;

/// HTTP verbs used by the authority contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// `GET /logged_in`
pub const SESSION_STATUS_PATH: &str = "/logged_in";
/// `POST /login`
pub const LOGIN_PATH: &str = "/login";
/// `POST /users`
pub const SIGNUP_PATH: &str = "/users";
/// `DELETE /logout`
pub const LOGOUT_PATH: &str = "/logout";

/// A request against the authority, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: None }
    }

    #[must_use]
    pub fn delete(path: &'static str) -> Self {
        Self { method: Method::Delete, path, body: None }
    }

    #[must_use]
    pub fn with_body(method: Method, path: &'static str, body: Value) -> Self {
        Self { method, path, body: Some(body) }
    }
}

/// Status and decoded JSON body. An empty body decodes to `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain a usable response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (DNS, connection refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    /// A response arrived but its body was not the JSON we expected.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// A non-2xx response that carried nothing the client could interpret.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// This build has no transport (e.g. a non-browser build of the web client).
    #[error("transport unavailable: {0}")]
    Unavailable(&'static str),
}

/// Decode a raw response body. Blank bodies are `Null` so `204`/empty logout
/// responses are not decode failures.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] when the body is non-empty and not JSON.
pub fn decode_body(raw: &str) -> Result<Value, TransportError> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Build a [`Response`] from a status and raw body text.
///
/// A non-JSON body on an error status (a proxy's HTML 502 page, say) is
/// reported as [`TransportError::Status`] rather than a decode failure.
///
/// # Errors
///
/// Returns [`TransportError::Status`] or [`TransportError::Decode`] when the
/// body is not JSON.
pub fn decode_response(status: u16, raw: &str) -> Result<Response, TransportError> {
    match decode_body(raw) {
        Ok(body) => Ok(Response { status, body }),
        Err(_) if !(200..300).contains(&status) => Err(TransportError::Status(status)),
        Err(error) => Err(error),
    }
}

/// Join a base URL and a contract path without doubling slashes.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// One request/response exchange with the authority.
///
/// Futures are `?Send`: every front end drives them from a single logical
/// thread (the browser event loop or one tokio task).
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        (**self).send(request).await
    }
}
