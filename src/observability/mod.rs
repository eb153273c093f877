//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request executor produces:
//!     → tracing events (request sent, response status, backoff, exhaustion)
//!     → metrics.rs (response, rate-limit and exhaustion counters)
//!
//! Consumers:
//!     → logging.rs installs a fmt subscriber (CLI, tests)
//!     → any `metrics` recorder the application installs
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
