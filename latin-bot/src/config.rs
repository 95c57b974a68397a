//! Bot config loaded from env: Telegram connection, log file, dictionary endpoint.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use whitaker::{LookupConfig, DEFAULT_BASE_URL};

/// Where to look words up.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// WORDS_BASE_URL
    pub base_url: String,
    /// WORDS_TIMEOUT_SECS; unset means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl DictionaryConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("WORDS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match env::var("WORDS_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("WORDS_TIMEOUT_SECS is not a number: {}", raw))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    /// Builds the lookup config; fails if the base URL does not parse.
    pub fn lookup_config(&self) -> Result<LookupConfig> {
        let config = LookupConfig::new(&self.base_url)?;
        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Everything `latin-bot run` needs.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub dictionary: DictionaryConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let dictionary = DictionaryConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/latin-bot.log".to_string());
        Ok(Self {
            telegram,
            dictionary,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.dictionary
            .lookup_config()
            .context("WORDS_BASE_URL is not a valid URL")?;
        Ok(())
    }
}
