//! Concurrent fetcher: both endpoints over one query-scoped HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::direction::ByDirection;
use crate::endpoint::{EndpointSpec, Endpoints};
use crate::error::{LookupError, Result};

/// HTML body returned for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage(String);

impl RawPage {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Connection context for a single query. Both requests share its pool; it is dropped with the query.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
}

impl Session {
    /// Opens a fresh client. `timeout` applies per request; `None` waits indefinitely.
    pub fn open(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LookupError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Uses a client (or pool) handed in by the caller.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches both endpoints concurrently and waits for both.
    ///
    /// Pages come back in the slots of their endpoints regardless of completion order. If either
    /// request fails the whole call fails; when both fail the Latin endpoint is reported.
    #[instrument(skip(self, endpoints))]
    pub async fn fetch_both(&self, endpoints: &Endpoints) -> Result<ByDirection<RawPage>> {
        let (latin_to_english, english_to_latin) = tokio::join!(
            self.fetch(&endpoints.latin_to_english),
            self.fetch(&endpoints.english_to_latin),
        );
        Ok(ByDirection {
            latin_to_english: latin_to_english?,
            english_to_latin: english_to_latin?,
        })
    }

    async fn fetch(&self, endpoint: &EndpointSpec) -> Result<RawPage> {
        let direction = endpoint.direction();
        let fetch_error = move |source: reqwest::Error| LookupError::Fetch { direction, source };

        debug!(direction = %direction, url = %endpoint.url(), "Fetching dictionary page");
        let response = self
            .client
            .get(endpoint.url().clone())
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;
        let body = response.text().await.map_err(fetch_error)?;
        debug!(direction = %direction, bytes = body.len(), "Dictionary page fetched");

        Ok(RawPage(body))
    }
}
