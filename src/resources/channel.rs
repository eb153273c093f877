//! Channel operations.

use crate::builders::CreateMessage;
use crate::client::Client;
use crate::http::{ApiResult, HttpResult, RequestDescriptor};
use crate::model::MessageData;
use crate::resources::message::Message;

/// A channel, addressed by id.
#[derive(Debug, Clone)]
pub struct Channel {
    client: Client,
    id: String,
}

impl Channel {
    pub(crate) fn new(client: Client, id: String) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn messages_path(&self) -> String {
        format!("/channels/{}/messages", self.id)
    }

    /// Post a message to the channel.
    pub async fn send(&self, message: &CreateMessage) -> HttpResult<ApiResult<Message>> {
        let request = RequestDescriptor::post(self.messages_path()).with_json(message)?;
        let result = self.client.request::<MessageData>(request).await?;
        Ok(result.map(|data| Message::new(self.client.clone(), data)))
    }

    pub async fn fetch_message(&self, message_id: &str) -> HttpResult<ApiResult<Message>> {
        let request = RequestDescriptor::get(format!("{}/{}", self.messages_path(), message_id));
        let result = self.client.request::<MessageData>(request).await?;
        Ok(result.map(|data| Message::new(self.client.clone(), data)))
    }

    /// Messages pinned in the channel, newest first.
    pub async fn pinned_messages(&self) -> HttpResult<ApiResult<Vec<Message>>> {
        let request = RequestDescriptor::get(format!("/channels/{}/pins", self.id));
        let result = self.client.request::<Vec<MessageData>>(request).await?;
        Ok(result.map(|messages| {
            messages
                .into_iter()
                .map(|data| Message::new(self.client.clone(), data))
                .collect()
        }))
    }
}
