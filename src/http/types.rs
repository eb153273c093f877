//! Result channel and error definitions for REST calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ValidationError;
use crate::http::transport::TransportError;

/// Message of the synthetic error returned when every attempt was throttled.
pub const RETRY_EXHAUSTED_MESSAGE: &str = "Retry amount is reached.";

/// Code of the synthetic error returned when every attempt was throttled.
pub const RETRY_EXHAUSTED_CODE: i64 = -1;

/// Structured error body returned by the API.
///
/// `errors` holds the nested per-field detail the API attaches to
/// validation failures, when present. Bodies without a `code` (plain
/// gateway or routing errors) decode with code 0.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ApiError {
    /// Error reported after the retry budget was spent on 429 responses.
    pub fn retry_exhausted() -> Self {
        Self {
            message: RETRY_EXHAUSTED_MESSAGE.to_string(),
            code: RETRY_EXHAUSTED_CODE,
            errors: None,
        }
    }

    /// Build an error from any well-formed JSON error body.
    ///
    /// Objects map onto the known fields. Anything else (an array, a bare
    /// string, an object with mistyped fields) is kept whole in `errors`
    /// with its JSON text as the message.
    pub fn from_body(body: serde_json::Value) -> Self {
        match serde_json::from_value(body.clone()) {
            Ok(error) => error,
            Err(_) => Self {
                message: body.to_string(),
                code: 0,
                errors: Some(body),
            },
        }
    }

    /// Whether this is the synthetic retry-exhausted error.
    pub fn is_retry_exhausted(&self) -> bool {
        self.code == RETRY_EXHAUSTED_CODE && self.message == RETRY_EXHAUSTED_MESSAGE
    }
}

/// Outcome of one logical API operation: the decoded payload or the API's
/// own error. Callers branch on it before touching the payload.
pub type ApiResult<T> = Result<T, ApiError>;

/// Faults that abort a call outside the API's error contract.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request path was empty.
    #[error("request path must not be empty")]
    InvalidPath,

    /// Bot token was empty or whitespace.
    #[error("bot token must not be empty")]
    EmptyToken,

    /// Token or bot metadata cannot be encoded as a header value.
    #[error("invalid {name} header value")]
    InvalidHeader { name: &'static str },

    /// Client configuration failed validation.
    #[error("invalid client configuration: {}", join(.0))]
    Config(Vec<ValidationError>),

    /// Request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body was not the JSON the API contract promises.
    #[error("failed to decode {status} response body: {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for executor calls.
pub type HttpResult<T> = Result<T, HttpError>;
