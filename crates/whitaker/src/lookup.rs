//! The translation pipeline: endpoints → fetch → extract → classify → format.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, instrument, warn};

use crate::classify::classify;
use crate::endpoint::{build_endpoints, DEFAULT_BASE_URL};
use crate::error::{LookupError, Result};
use crate::extract::extract_block;
use crate::fetch::Session;
use crate::format::format_outcome;
use crate::outcome::TranslationOutcome;

/// Where the dictionary lives and how long a single request may take.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl LookupConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            LookupError::Config(format!("invalid dictionary URL {}: {}", base_url, e))
        })?;
        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default dictionary URL is valid")
    }
}

/// Anything that can turn a word into a [`TranslationOutcome`]. Handlers depend on this, tests substitute it.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, word: &str) -> Result<TranslationOutcome>;
}

/// Looks words up against the WORDS CGI. Holds no connection state between queries.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    config: LookupConfig,
}

impl Lookup {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

#[async_trait]
impl Translator for Lookup {
    #[instrument(skip(self))]
    async fn translate(&self, word: &str) -> Result<TranslationOutcome> {
        debug!(word = %word, "step: building endpoints");
        let endpoints = build_endpoints(self.config.base_url(), word);

        debug!(word = %word, "step: fetching");
        let pages = {
            let session = Session::open(self.config.timeout())?;
            session.fetch_both(&endpoints).await?
        };

        debug!(word = %word, "step: extracting");
        let blocks = pages.try_map(|direction, page| {
            extract_block(&page).map_err(|reason| LookupError::Parse { direction, reason })
        })?;

        debug!(word = %word, "step: classifying");
        let results = blocks.map(classify);

        debug!(word = %word, "step: formatting");
        let outcome = format_outcome(word, results);

        for section in outcome.sections() {
            info!(word = %word, direction = %section.direction, "Translations found");
        }
        if let Some(diagnostic) = outcome.diagnostic() {
            warn!(word = %word, diagnostic = %diagnostic, "No translations found");
        }

        Ok(outcome)
    }
}
