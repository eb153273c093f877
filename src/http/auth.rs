//! Bot credential handling.

use std::fmt;

/// Bot token used for the `Authorization: Bot <token>` header.
///
/// The value is never exposed through `Debug` or `Display`, so a token
/// cannot end up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bot {}", self.0)
    }

    /// Empty or whitespace-only; such a token is refused when building a
    /// client.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
