//! `reqwest` implementation of the session transport.
//!
//! Cookies live in an in-memory jar for the lifetime of the process, which
//! plays the role of the browser's `credentials: "include"`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use session::transport::{decode_response, endpoint_url};
use session::{ClientConfig, Method, Request, Response, Transport, TransportError};

use crate::CliError;

pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Build a client whose jar is optionally seeded with `session_cookie`.
    pub(crate) fn new(config: &ClientConfig, session_cookie: Option<&str>) -> Result<Self, CliError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| CliError::InvalidBaseUrl(e.to_string()))?;
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session_cookie {
            if !cookie.contains('=') {
                return Err(CliError::InvalidCookie(cookie.to_owned()));
            }
            jar.add_cookie_str(cookie, &base_url);
        }

        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, jar, base_url, timeout_ms: config.timeout_ms() })
    }

    /// `Cookie` header value the jar would send to the authority.
    pub(crate) fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(ToOwned::to_owned))
    }

    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout_ms)
        } else if error.is_decode() {
            TransportError::Decode(error.to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let url = endpoint_url(self.base_url.as_str(), request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let builder = self.client.request(method, &url);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;
        let status = response.status().as_u16();
        let raw = response.text().await.map_err(|e| self.map_error(&e))?;
        tracing::debug!(status, bytes = raw.len(), "response received");
        decode_response(status, &raw)
    }
}
