//! Discord REST API client.
//!
//! Sends messages, manages reactions and pins, and builds embed and
//! component payloads. Every call goes through one request executor that
//! absorbs rate limiting and hands back an explicit `ApiResult`.

pub mod builders;
pub mod client;
pub mod config;
pub mod http;
pub mod model;
pub mod observability;
pub mod resilience;
pub mod resources;

pub use client::Client;
pub use config::ClientConfig;
pub use http::{ApiError, ApiResult, HttpError, HttpResult};
