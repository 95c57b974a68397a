//! Bot abstraction for replying, showing activity and reacting.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide.

use crate::error::Result;
use crate::types::{Acknowledgement, Chat, Message};
use async_trait::async_trait;

/// Outgoing side of a chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Replies to `message` with MarkdownV2 text; the caller escapes it.
    async fn reply_markdown(&self, message: &Message, text: &str) -> Result<()>;
    /// Shows a "typing…" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
    /// Puts an acknowledgement reaction on `message`.
    async fn react(&self, message: &Message, ack: Acknowledgement) -> Result<()>;
}
