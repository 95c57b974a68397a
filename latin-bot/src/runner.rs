//! Wires config, dictionary client, Telegram adapter and handler chain together.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use whitaker::{Lookup, TranslationOutcome, Translator};

use crate::config::{BotConfig, DictionaryConfig};
use crate::handlers::{DirectMessageGate, TranslationHandler};

/// Gate first, then the translation handler.
pub fn build_handler_chain(translator: Arc<dyn Translator>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(DirectMessageGate::new()))
        .add_handler(Arc::new(TranslationHandler::new(translator, bot)))
}

/// Main entry for `latin-bot run`: validate config, init logging, then long-poll until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let lookup_config = config.dictionary.lookup_config()?;
    info!(
        base_url = %lookup_config.base_url(),
        timeout = ?lookup_config.timeout(),
        log_file = %config.log_file,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(Arc::new(Lookup::new(lookup_config)), bot);

    info!("Bot started successfully");
    run_repl(teloxide_bot, chain).await
}

/// One-shot lookup for `latin-bot lookup <WORD>`; logs go to stderr so stdout stays clean.
pub async fn lookup_once(word: &str) -> Result<TranslationOutcome> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let lookup = Lookup::new(DictionaryConfig::from_env()?.lookup_config()?);
    lookup
        .translate(word)
        .await
        .with_context(|| format!("lookup failed for {:?}", word))
}
