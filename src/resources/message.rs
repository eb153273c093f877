//! Message operations.

use crate::builders::CreateMessage;
use crate::client::Client;
use crate::http::{ApiResult, HttpResult, RequestDescriptor};
use crate::model::{MessageData, MessageReference};

/// A message fetched or created through the API, with the operations that
/// act on it.
#[derive(Debug, Clone)]
pub struct Message {
    client: Client,
    pub data: MessageData,
}

impl Message {
    pub(crate) fn new(client: Client, data: MessageData) -> Self {
        Self { client, data }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn channel_id(&self) -> &str {
        &self.data.channel_id
    }

    fn path(&self) -> String {
        format!("/channels/{}/messages/{}", self.data.channel_id, self.data.id)
    }

    fn own_reaction_path(&self, emoji: &str) -> String {
        format!("{}/reactions/{}/@me", self.path(), urlencoding::encode(emoji))
    }

    fn pin_path(&self) -> String {
        format!("/channels/{}/pins/{}", self.data.channel_id, self.data.id)
    }

    fn wrap(&self, result: ApiResult<MessageData>) -> ApiResult<Message> {
        result.map(|data| Message::new(self.client.clone(), data))
    }

    pub async fn delete(&self) -> HttpResult<ApiResult<()>> {
        self.client.request(RequestDescriptor::delete(self.path())).await
    }

    /// Replace the fields set in `message`; returns the updated message.
    pub async fn edit(&self, message: &CreateMessage) -> HttpResult<ApiResult<Message>> {
        let request = RequestDescriptor::patch(self.path()).with_json(message)?;
        let result = self.client.request::<MessageData>(request).await?;
        Ok(self.wrap(result))
    }

    /// Post `message` in the same channel as a reply to this one.
    pub async fn reply(&self, message: &CreateMessage) -> HttpResult<ApiResult<Message>> {
        let mut body = message.clone();
        body.message_reference = Some(MessageReference::to_message(self.data.id.as_str()));
        let request = RequestDescriptor::post(format!("/channels/{}/messages", self.data.channel_id))
            .with_json(&body)?;
        let result = self.client.request::<MessageData>(request).await?;
        Ok(self.wrap(result))
    }

    /// React as the bot. `emoji` is a unicode emoji or `name:id` for custom ones.
    pub async fn add_reaction(&self, emoji: &str) -> HttpResult<ApiResult<()>> {
        self.client
            .request(RequestDescriptor::put(self.own_reaction_path(emoji)))
            .await
    }

    pub async fn remove_reaction(&self, emoji: &str) -> HttpResult<ApiResult<()>> {
        self.client
            .request(RequestDescriptor::delete(self.own_reaction_path(emoji)))
            .await
    }

    pub async fn pin(&self) -> HttpResult<ApiResult<()>> {
        self.client.request(RequestDescriptor::put(self.pin_path())).await
    }

    pub async fn unpin(&self) -> HttpResult<ApiResult<()>> {
        self.client
            .request(RequestDescriptor::delete(self.pin_path()))
            .await
    }
}
