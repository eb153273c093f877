//! Payload builders.
//!
//! # Data Flow
//! ```text
//! EmbedBuilder ──────────┐
//! create_components() ───┼─→ CreateMessage ─→ Channel::send / Message::edit / reply
//! ```
//!
//! # Design Decisions
//! - Embed limits are applied by truncation, never by failing
//! - Component layouts are checked up front and fail with `ComponentError`

pub mod components;
pub mod embed;
pub mod message;

pub use components::{create_components, ComponentError};
pub use embed::EmbedBuilder;
pub use message::CreateMessage;
