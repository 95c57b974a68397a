//! # latin-bot
//!
//! Telegram bot that answers each direct message with Latin → English and English → Latin
//! dictionary entries for the word it contains. Lookup lives in `whitaker`; transport in
//! `dbot-telegram`; this crate holds config, handlers, reply rendering and wiring.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod render;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, DictionaryConfig};
pub use handlers::{DirectMessageGate, TranslationHandler};
pub use render::{render_markdown, render_plain};
pub use runner::{build_handler_chain, lookup_once, run_bot};
