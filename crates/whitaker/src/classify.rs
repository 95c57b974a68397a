//! Null-result classifier.

use crate::direction::Direction;

/// Substrings WORDS prints when a lookup found nothing. Compared case-insensitively.
pub const NULL_MARKERS: [&str; 3] = ["no match", "unknown", "========"];

/// Text of one direction, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResult {
    pub direction: Direction,
    pub content: Content,
}

impl ClassifiedResult {
    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }
}

/// True if `text` contains any of [`NULL_MARKERS`], ignoring case.
pub fn is_null_result(text: &str) -> bool {
    let lowered = text.to_lowercase();
    NULL_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Classifies one extracted block. Text without a marker is kept verbatim.
pub fn classify(direction: Direction, block: String) -> ClassifiedResult {
    let content = if is_null_result(&block) {
        Content::Empty
    } else {
        Content::Text(block)
    };
    ClassifiedResult { direction, content }
}
