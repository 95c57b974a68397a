//! Endpoint builder: the two request targets for one word.

use reqwest::Url;

use crate::direction::{ByDirection, Direction};

/// WORDS CGI hosted by the University of Notre Dame.
pub const DEFAULT_BASE_URL: &str = "https://archives.nd.edu/cgi-bin/wordz.pl";

/// One request target. The direction is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    direction: Direction,
    url: Url,
}

impl EndpointSpec {
    /// Puts `word` into the direction's query parameter. Any existing query on `base` is replaced.
    ///
    /// The word is form-urlencoded, so reserved characters (`&`, `#`, spaces) stay inside the value.
    pub fn new(base: &Url, direction: Direction, word: &str) -> Self {
        let mut url = base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair(direction.query_param(), word);
        Self { direction, url }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Both endpoints for one query.
pub type Endpoints = ByDirection<EndpointSpec>;

/// Builds the Latin-source and English-source targets for `word`. No validation is done here.
pub fn build_endpoints(base: &Url, word: &str) -> Endpoints {
    ByDirection::from_fn(|direction| EndpointSpec::new(base, direction, word))
}
