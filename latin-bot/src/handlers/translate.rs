//! Answers a direct message by translating its text and replying with both directions.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Acknowledgement, Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{debug, error, info, instrument, warn};
use whitaker::Translator;

use crate::render::render_markdown;

/// Terminal handler: looks the message text up and replies with the rendered outcome.
///
/// A lookup that fails as a whole (fetch or page-format error) is logged and returned as a
/// [`HandlerError`]; no reply is sent for it. The acknowledgement reaction runs detached so a
/// slow or failing reaction never delays or fails the reply.
#[derive(Clone)]
pub struct TranslationHandler {
    translator: Arc<dyn Translator>,
    bot: Arc<dyn Bot>,
}

impl TranslationHandler {
    pub fn new(translator: Arc<dyn Translator>, bot: Arc<dyn Bot>) -> Self {
        Self { translator, bot }
    }

    fn acknowledge(&self, message: &Message, succeeded: bool) {
        let bot = Arc::clone(&self.bot);
        let message = message.clone();
        let ack = Acknowledgement::from_success(succeeded);
        tokio::spawn(async move {
            if let Err(e) = bot.react(&message, ack).await {
                warn!(error = %e, message_id = %message.id, "Failed to add reaction");
            }
        });
    }
}

#[async_trait]
impl Handler for TranslationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let word = message.content.as_str();
        if word.is_empty() {
            return Err(HandlerError::NoText.into());
        }

        info!(
            user = %message.user.display_name(),
            word = %word,
            "Translation requested"
        );

        if let Err(e) = self.bot.send_typing(&message.chat).await {
            debug!(error = %e, "Failed to send typing indicator");
        }

        let outcome = match self.translator.translate(word).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_upstream_format_change() => {
                error!(error = %e, word = %word, "Dictionary page format not recognized");
                return Err(HandlerError::UpstreamFormat(e.to_string()).into());
            }
            Err(e) => {
                error!(error = %e, word = %word, "Dictionary lookup failed");
                return Err(HandlerError::Lookup(e.to_string()).into());
            }
        };

        self.acknowledge(message, outcome.succeeded());

        let reply = render_markdown(&outcome);
        self.bot.reply_markdown(message, &reply).await?;
        info!(succeeded = outcome.succeeded(), "Reply sent");

        Ok(HandlerResponse::Reply(reply))
    }
}
