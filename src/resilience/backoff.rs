//! Rate-limit backoff derived from response headers.

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Header carrying the seconds until the rate-limit bucket resets.
pub const RESET_AFTER_HEADER: &str = "x-ratelimit-reset-after";

/// Delay to wait before retrying a 429 response.
///
/// Reads `x-ratelimit-reset-after` as decimal seconds (e.g. `"1.337"`).
/// Falls back to `fallback` when the header is absent, not valid UTF-8,
/// not a number, negative, or not finite.
pub fn rate_limit_delay(headers: &HeaderMap, fallback: Duration) -> Duration {
    headers
        .get(RESET_AFTER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_seconds)
        .unwrap_or(fallback)
}

fn parse_seconds(raw: &str) -> Option<Duration> {
    let secs: f64 = raw.trim().parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
