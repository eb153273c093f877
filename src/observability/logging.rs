//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber for binaries and tests
//! - Configure log level via config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - The library only emits `tracing` events; with no subscriber they are dropped
//! - The bot token is never part of any event

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise `discord_rest=<level>`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("discord_rest={}", level)))
}

/// Install a fmt subscriber. Returns `false` if one was already installed.
pub fn init_logging(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
