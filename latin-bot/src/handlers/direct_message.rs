//! Gate that lets only human-sent direct messages with text reach the rest of the chain.

use async_trait::async_trait;
use dbot_core::{Handler, Message, Result};
use tracing::debug;

/// Stops the chain for bots, group or channel chats, and messages without text.
#[derive(Clone, Default)]
pub struct DirectMessageGate;

impl DirectMessageGate {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for DirectMessageGate {
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.user.is_bot {
            debug!(user_id = message.user.id, "Ignoring message from a bot");
            return Ok(false);
        }
        if !message.chat.is_private() {
            debug!(
                chat_id = message.chat.id,
                kind = ?message.chat.kind,
                "Ignoring message outside a direct chat"
            );
            return Ok(false);
        }
        if message.content.is_empty() {
            debug!(user_id = message.user.id, "Ignoring message without text");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::{Chat, ChatKind, User};

    fn message(is_bot: bool, kind: ChatKind, content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: Some("marcus".to_string()),
                first_name: None,
                last_name: None,
                is_bot,
            },
            chat: Chat { id: 7, kind },
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_passes_private_text_from_human() {
        let gate = DirectMessageGate::new();
        assert!(gate.before(&message(false, ChatKind::Private, "rosa")).await.unwrap());
    }

    #[tokio::test]
    async fn test_stops_bot_authors() {
        let gate = DirectMessageGate::new();
        assert!(!gate.before(&message(true, ChatKind::Private, "rosa")).await.unwrap());
    }

    #[tokio::test]
    async fn test_stops_group_and_channel_chats() {
        let gate = DirectMessageGate::new();
        assert!(!gate.before(&message(false, ChatKind::Group, "rosa")).await.unwrap());
        assert!(!gate.before(&message(false, ChatKind::Channel, "rosa")).await.unwrap());
    }

    #[tokio::test]
    async fn test_stops_messages_without_text() {
        let gate = DirectMessageGate::new();
        assert!(!gate.before(&message(false, ChatKind::Private, "")).await.unwrap());
    }
}
