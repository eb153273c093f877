//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.
//! The bot token is deliberately absent: it is passed to the client directly.

use serde::{Deserialize, Serialize};

/// Default REST API base (Discord API v10).
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Root configuration for the REST client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base URL every request path is appended to.
    pub api_base: String,

    /// Identity reported in the User-Agent header.
    pub bot_metadata: BotMetadata,

    /// Rate-limit retry configuration.
    pub retries: RetryConfig,

    /// Transport timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bot_metadata: BotMetadata::default(),
            retries: RetryConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Bot identity used to compose the User-Agent header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BotMetadata {
    /// Bot name (e.g., "Bot").
    pub bot_name: String,

    /// Bot homepage URL, may be empty.
    pub bot_url: String,

    /// Bot version string (e.g., "v0.0.1").
    pub bot_version: String,
}

impl BotMetadata {
    /// Render as `<name> (<url>, <version>)`.
    pub fn user_agent(&self) -> String {
        format!("{} ({}, {})", self.bot_name, self.bot_url, self.bot_version)
    }
}

impl Default for BotMetadata {
    fn default() -> Self {
        Self {
            bot_name: "Bot".to_string(),
            bot_url: String::new(),
            bot_version: "v0.0.1".to_string(),
        }
    }
}

/// Rate-limit retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,

    /// Delay in seconds used when a 429 carries no usable
    /// `x-ratelimit-reset-after` header.
    pub fallback_delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 30,
            fallback_delay_secs: 5.0,
        }
    }
}

/// Timeouts handed to the default HTTP transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
