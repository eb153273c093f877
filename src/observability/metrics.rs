//! Metrics collection.
//!
//! # Metrics
//! - `discord_http_requests_total` (counter): responses by method, status
//! - `discord_http_rate_limited_total` (counter): 429 responses by method
//! - `discord_http_retry_exhausted_total` (counter): calls that ran out of retries
//!
//! # Design Decisions
//! - Uses the `metrics` facade; the application chooses the recorder
//! - Without a recorder every update is a no-op

use crate::http::request::Method;

/// Record a response received from the API.
pub fn record_response(method: Method, status: u16) {
    metrics::counter!(
        "discord_http_requests_total",
        "method" => method.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a 429 response.
pub fn record_rate_limited(method: Method) {
    metrics::counter!("discord_http_rate_limited_total", "method" => method.as_str()).increment(1);
}

/// Record a call that gave up after the retry budget was spent.
pub fn record_retry_exhausted() {
    metrics::counter!("discord_http_retry_exhausted_total").increment(1);
}
