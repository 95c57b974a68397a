use thiserror::Error;

use crate::direction::Direction;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Fetch error ({direction}): {source}")]
    Fetch {
        direction: Direction,
        #[source]
        source: reqwest::Error,
    },

    #[error("Parse error ({direction}): {reason}")]
    Parse {
        direction: Direction,
        reason: ParseFailure,
    },

    #[error("Config error: {0}")]
    Config(String),
}

/// Why a dictionary page did not have the expected shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no <pre> block in response")]
    MissingBlock,

    #[error("<pre> block has no content")]
    EmptyBlock,
}

impl LookupError {
    /// The endpoint that failed, if the error belongs to one.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            LookupError::Fetch { direction, .. } | LookupError::Parse { direction, .. } => {
                Some(*direction)
            }
            LookupError::Config(_) => None,
        }
    }

    /// True when the service answered but its HTML no longer looks like a WORDS page.
    pub fn is_upstream_format_change(&self) -> bool {
        matches!(self, LookupError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
