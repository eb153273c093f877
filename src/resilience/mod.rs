//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! 429 response from the API:
//!     → backoff.rs (read x-ratelimit-reset-after, fall back to configured delay)
//!     → retries.rs (consume one retry, stop at the ceiling)
//!     → executor sleeps and re-sends the same request
//! ```
//!
//! # Design Decisions
//! - Only throttling (429) is retried; API errors are final
//! - The server-provided reset delay is authoritative, no jitter added
//! - No rate-limit bucket is shared across concurrent calls

pub mod backoff;
pub mod retries;

pub use backoff::rate_limit_delay;
pub use retries::RetryState;
