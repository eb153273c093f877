//! Resource wrappers.
//!
//! # Data Flow
//! ```text
//! Client::channel(id) → Channel ─ send / fetch_message / pinned_messages
//!                                     ↓
//!                                  Message ─ edit / reply / delete
//!                                            add_reaction / remove_reaction
//!                                            pin / unpin
//! ```
//!
//! Each operation builds a path and typed body, runs it through the
//! client's executor and maps the payload into a wrapper.

pub mod channel;
pub mod message;

pub use channel::Channel;
pub use message::Message;
