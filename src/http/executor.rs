//! Request executor with rate-limit-aware retry.
//!
//! # Responsibilities
//! - Turn a `RequestDescriptor` into a transport request (URL, headers, body)
//! - Absorb 429 throttling by sleeping for the server-provided reset delay
//! - Map the final response into `ApiResult<T>`
//!
//! # Protocol
//! ```text
//! loop (at most max_retries + 1 attempts):
//!     send → read body text
//!     204 + empty body → Ok(null payload)
//!     2xx              → Ok(parse body as T)
//!     429              → sleep(x-ratelimit-reset-after | fallback), retry
//!     anything else    → Err(parse body as ApiError), no retry
//! all attempts throttled → Err(ApiError { "Retry amount is reached.", -1 })
//! ```
//!
//! Malformed JSON and transport failures are faults (`HttpError`), never
//! part of the `ApiResult` error channel.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::config::{validate_config, ClientConfig, ValidationError};
use crate::http::auth::Token;
use crate::http::request::{build_headers, join_url, RequestDescriptor};
use crate::http::response::{classify, ResponseClass};
use crate::http::transport::{Transport, TransportRequest};
use crate::http::types::{ApiError, ApiResult, HttpError, HttpResult};
use crate::observability::metrics;
use crate::resilience::{rate_limit_delay, RetryState};

struct ExecutorInner {
    config: ClientConfig,
    headers: HeaderMap,
    fallback_delay: Duration,
    transport: Arc<dyn Transport>,
}

/// Performs API calls. Cheap to clone; clones share the immutable
/// configuration and the transport.
#[derive(Clone)]
pub struct RequestExecutor {
    inner: Arc<ExecutorInner>,
}

impl RequestExecutor {
    /// Validate the configuration and precompute the request headers.
    pub fn new(
        token: Token,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> HttpResult<Self> {
        if token.is_empty() {
            return Err(HttpError::EmptyToken);
        }
        validate_config(&config).map_err(HttpError::Config)?;
        let headers = build_headers(&token, &config.bot_metadata)?;
        let fallback_secs = config.retries.fallback_delay_secs;
        let fallback_delay = Duration::try_from_secs_f64(fallback_secs).map_err(|_| {
            HttpError::Config(vec![ValidationError::InvalidFallbackDelay(fallback_secs)])
        })?;

        Ok(Self {
            inner: Arc::new(ExecutorInner {
                config,
                headers,
                fallback_delay,
                transport,
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Run one logical API operation to completion.
    ///
    /// Returns `Ok(Ok(payload))` on success, `Ok(Err(api_error))` for an API
    /// failure or an exhausted retry budget, and `Err(_)` for faults.
    /// A 204 payload is decoded from JSON `null`, so use `()`, `Option<_>`
    /// or `serde_json::Value` for endpoints without content.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> HttpResult<ApiResult<T>> {
        let inner = &self.inner;
        let url = join_url(&inner.config.api_base, &request.path)?;
        let body = request.body_text()?;
        let method = request.method;

        tracing::debug!(method = %method, url = %url, body = ?request.body, "Sending request");

        let mut retry = RetryState::new(inner.config.retries.max_retries);
        loop {
            let response = inner
                .transport
                .send(TransportRequest {
                    method,
                    url: url.clone(),
                    headers: inner.headers.clone(),
                    body: body.clone(),
                })
                .await?;

            metrics::record_response(method, response.status);
            tracing::debug!(
                method = %method,
                url = %url,
                status = response.status,
                attempt = retry.attempt(),
                "Received response"
            );

            match classify(response.status, &response.body) {
                ResponseClass::NoContent => {
                    return decode(response.status, "null", response.body).map(Ok);
                }
                ResponseClass::Success => {
                    return decode(response.status, &response.body, response.body.clone()).map(Ok);
                }
                ResponseClass::Failure => {
                    let body: serde_json::Value =
                        decode(response.status, &response.body, response.body.clone())?;
                    let error = ApiError::from_body(body);
                    tracing::debug!(status = response.status, code = error.code, message = %error.message, "API error");
                    return Ok(Err(error));
                }
                ResponseClass::RateLimited => {
                    metrics::record_rate_limited(method);
                    if !retry.can_retry() {
                        break;
                    }
                    let delay = rate_limit_delay(&response.headers, inner.fallback_delay);
                    tracing::info!(
                        method = %method,
                        url = %url,
                        attempt = retry.attempt(),
                        delay_ms = delay.as_millis() as u64,
                        "Rate limited, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry.record_retry();
                }
            }
        }

        metrics::record_retry_exhausted();
        tracing::warn!(
            method = %method,
            url = %url,
            retries = retry.retries(),
            "Retry amount is reached."
        );
        Ok(Err(ApiError::retry_exhausted()))
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("api_base", &self.inner.config.api_base)
            .field("max_retries", &self.inner.config.retries.max_retries)
            .finish()
    }
}

fn decode<T: DeserializeOwned>(status: u16, text: &str, body: String) -> HttpResult<T> {
    serde_json::from_str(text).map_err(|source| HttpError::Decode {
        status,
        body,
        source,
    })
}
