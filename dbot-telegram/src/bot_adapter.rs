//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Acknowledgement, Bot as CoreBot, Chat, DbotError, Message, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, MessageId, ParseMode, ReactionType, ReplyParameters};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

/// Parses a message id string into a Telegram message id.
pub fn parse_message_id(s: &str) -> Result<MessageId> {
    s.parse()
        .map(MessageId)
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn reply_markdown(&self, message: &Message, text: &str) -> Result<()> {
        let reply_to = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .reply_parameters(ReplyParameters::new(reply_to))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn react(&self, message: &Message, ack: Acknowledgement) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .set_message_reaction(ChatId(message.chat.id), id)
            .reaction(vec![ReactionType::Emoji {
                emoji: ack.emoji().to_string(),
            }])
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
