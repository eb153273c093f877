//! Client entry point.
//!
//! ```no_run
//! use discord_rest::{builders::CreateMessage, Client};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("TOKEN")?;
//! let channel = client.channel("123456789012345678");
//! match channel.send(&CreateMessage::new().content("Hello, World!")).await? {
//!     Ok(message) => println!("sent {}", message.id()),
//!     Err(e) => eprintln!("API error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::http::{
    ApiResult, HttpResult, RequestDescriptor, RequestExecutor, ReqwestTransport, Token, Transport,
};
use crate::resources::{Channel, Message};

/// Handle to the REST API. Cheap to clone; clones share one executor.
#[derive(Debug, Clone)]
pub struct Client {
    executor: RequestExecutor,
}

impl Client {
    /// Client with default configuration and the reqwest transport.
    pub fn new(token: impl Into<Token>) -> HttpResult<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Client with explicit configuration and the reqwest transport.
    pub fn with_config(token: impl Into<Token>, config: ClientConfig) -> HttpResult<Self> {
        let transport = ReqwestTransport::new(&config.timeouts)?;
        Self::with_transport(token, config, Arc::new(transport))
    }

    /// Client with a caller-supplied transport.
    pub fn with_transport(
        token: impl Into<Token>,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> HttpResult<Self> {
        let executor = RequestExecutor::new(token.into(), config, transport)?;
        Ok(Self { executor })
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Handle for a channel. Makes no request.
    pub fn channel(&self, id: impl Into<String>) -> Channel {
        Channel::new(self.clone(), id.into())
    }

    /// Fetch a message by channel and message id.
    pub async fn message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> HttpResult<ApiResult<Message>> {
        self.channel(channel_id).fetch_message(message_id).await
    }

    /// Run an arbitrary request, for routes without a typed wrapper.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> HttpResult<ApiResult<T>> {
        self.executor.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpError;

    #[test]
    fn test_new_with_defaults() {
        let client = Client::new("T").unwrap();
        assert_eq!(client.config().retries.max_retries, 30);
        assert_eq!(client.channel("42").id(), "42");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ClientConfig::default();
        config.api_base = "nowhere".into();
        let err = Client::with_config("T", config).unwrap_err();
        assert!(matches!(err, HttpError::Config(_)));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Client::with_config("", ClientConfig::default()).unwrap_err();
        assert!(matches!(err, HttpError::EmptyToken));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = Client::new("very-secret-token").unwrap();
        assert!(!format!("{:?}", client).contains("very-secret-token"));
    }
}
