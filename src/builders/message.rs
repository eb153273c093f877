//! Body for creating, editing and replying to messages.

use serde::Serialize;

use crate::model::component::ActionRow;
use crate::model::embed::Embed;
use crate::model::message::MessageReference;

/// JSON body of the create/edit message endpoints.
///
/// Unset fields are omitted, so an edit only touches what was set. An
/// explicitly empty `embeds` or `components` list is sent as `[]`, which
/// clears them on edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
}

impl CreateMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message text, up to 2000 characters.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Send an empty embed list; on edit this removes every embed.
    pub fn clear_embeds(mut self) -> Self {
        self.embeds = Some(Vec::new());
        self
    }

    /// Rows, typically the output of [`crate::builders::create_components`].
    /// An empty `rows` removes the components on edit.
    pub fn components(mut self, rows: Vec<ActionRow>) -> Self {
        self.components = Some(rows);
        self
    }

    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.message_reference = Some(MessageReference::to_message(message_id));
        self
    }
}
