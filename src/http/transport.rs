//! HTTP transport abstraction.
//!
//! # Responsibilities
//! - Perform one raw HTTP exchange and hand back status, headers and text
//! - Keep the executor independent of a concrete HTTP client
//!
//! # Design Decisions
//! - `reqwest` is the default implementation
//! - Timeouts belong to the transport; the executor enforces none of its own
//! - Any `Arc<dyn Transport>` can be injected (tests, custom networking)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use thiserror::Error;

use crate::config::TimeoutConfig;
use crate::http::request::Method;

/// A fully prepared HTTP request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// A raw HTTP response with its body read to text.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Header value as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Errors raised before a response was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying HTTP client failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("transport error: {0}")]
    Other(String),
}

/// Capability that performs the network exchange for the executor.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport honouring the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_response_header_lookup() {
        let mut resp = TransportResponse::new(429, "");
        resp.headers
            .insert("x-ratelimit-reset-after", HeaderValue::from_static("1.5"));
        assert_eq!(resp.header("X-RateLimit-Reset-After"), Some("1.5"));
        assert_eq!(resp.header("retry-after"), None);
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(&TimeoutConfig::default()).is_ok());
    }
}
