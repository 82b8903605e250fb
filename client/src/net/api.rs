//! Browser [`Transport`] built on `gloo-net`.
//!
//! Client-side (csr): real fetches with `credentials: include`, so the
//! authority's session cookie travels with every request, each raced against
//! a `gloo-timers` deadline.
//! Elsewhere (native unit tests): `send` fails with
//! [`TransportError::Unavailable`] since fetch only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including an expired deadline, comes back as a
//! [`TransportError`]; callers fold it into their outcome instead of
//! panicking mid-render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use session::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, parse_timeout_secs};
use session::{ClientConfig, Request, Response, Transport, TransportError};

/// Build the browser config from values baked in at compile time.
///
/// Missing, unparsable, or zero timeouts fall back to the default, and an
/// invalid base URL falls back to the default authority with a warning.
fn build_config(base_url: Option<&str>, timeout_secs: Option<&str>) -> ClientConfig {
    let timeout_secs = timeout_secs.map_or(DEFAULT_REQUEST_TIMEOUT_SECS, parse_timeout_secs);
    let timeout = Duration::from_secs(timeout_secs);
    let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
    ClientConfig::new(base_url, timeout).unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default authority");
        ClientConfig { request_timeout: timeout, ..ClientConfig::default() }
    })
}

/// `gloo-timers` takes a `u32` millisecond count.
#[cfg(any(test, feature = "csr"))]
fn timer_ms(timeout_ms: u64) -> u32 {
    u32::try_from(timeout_ms).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug)]
pub struct GlooTransport {
    config: ClientConfig,
}

impl GlooTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Transport configured from `AUTH_API_BASE_URL` and
    /// `AUTH_REQUEST_TIMEOUT_SECS` as set when the bundle was built.
    pub fn from_build_env() -> Self {
        Self::new(build_config(option_env!("AUTH_API_BASE_URL"), option_env!("AUTH_REQUEST_TIMEOUT_SECS")))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let timeout_ms = self.config.timeout_ms();
            let exchange = Box::pin(exchange(&self.config.base_url, request));
            let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(timer_ms(timeout_ms)));
            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                // The losing fetch is dropped, so its response is never applied.
                Either::Right(((), _)) => Err(TransportError::Timeout(timeout_ms)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable("browser fetch"))
        }
    }
}

#[cfg(feature = "csr")]
async fn exchange(base_url: &str, request: Request) -> Result<Response, TransportError> {
    use gloo_net::http::Request as HttpRequest;
    use session::Method;

    let url = session::transport::endpoint_url(base_url, request.path);
    let builder = match request.method {
        Method::Get => HttpRequest::get(&url),
        Method::Post => HttpRequest::post(&url),
        Method::Delete => HttpRequest::delete(&url),
    }
    .credentials(web_sys::RequestCredentials::Include)
    .header("Accept", "application/json");

    let outgoing = match request.body {
        Some(body) => builder.json(&body),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let resp = outgoing.send().await.map_err(network_error)?;
    let status = resp.status();
    let raw = resp.text().await.map_err(network_error)?;
    session::transport::decode_response(status, &raw)
}

#[cfg(feature = "csr")]
fn network_error(error: gloo_net::Error) -> TransportError {
    TransportError::Network(error.to_string())
}
