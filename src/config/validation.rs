//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, delays representable as a `Duration`)
//! - Check that the API base is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the client

use std::time::Duration;

use thiserror::Error;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("api_base '{0}' is not a valid http(s) URL")]
    InvalidApiBase(String),

    #[error("bot_metadata.bot_name must not be empty")]
    EmptyBotName,

    #[error("retries.fallback_delay_secs must be a non-negative number of seconds that fits a duration, got {0}")]
    InvalidFallbackDelay(f64),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.api_base) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidApiBase(config.api_base.clone())),
    }

    if config.bot_metadata.bot_name.trim().is_empty() {
        errors.push(ValidationError::EmptyBotName);
    }

    let fallback = config.retries.fallback_delay_secs;
    if Duration::try_from_secs_f64(fallback).is_err() {
        errors.push(ValidationError::InvalidFallbackDelay(fallback));
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
