//! API data model.
//!
//! Typed request and response documents. Every body the client sends is one
//! of these types, so an unexpected shape fails at serialization instead of
//! reaching the API.

pub mod component;
pub mod embed;
pub mod message;

pub use component::{
    ActionRow, Button, ButtonStyle, Component, ComponentType, PartialEmoji, SelectOption,
    StringSelect,
};
pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, EmbedProvider};
pub use message::{MessageData, MessageReference, User};
