//! Response formatter: cleans surviving blocks and builds the [`TranslationOutcome`].

use std::fmt;

use crate::classify::{ClassifiedResult, Content};
use crate::direction::ByDirection;
use crate::outcome::TranslationOutcome;

/// Delimiter the cleaned text is wrapped in.
pub const CODE_FENCE: &str = "```";

/// Footnote markers WORDS appends, removed in this order.
const FOOTNOTE_MARKERS: [&str; 2] = ["\n\n*\n", "\n*"];

/// Cleaned dictionary text for one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    body: String,
}

impl FormattedText {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Cleans a raw block (see [`clean_block`]).
    pub fn from_block(raw: &str) -> Self {
        Self::new(clean_block(raw))
    }

    /// The cleaned text without the fence.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The cleaned text inside a code block.
    pub fn fenced(&self) -> String {
        format!(
            "{fence}\n{}\n{fence}",
            self.body.trim_end_matches('\n'),
            fence = CODE_FENCE
        )
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fenced())
    }
}

/// Drops the leading artifact character, strips footnote markers and spaces out `;` entries.
pub fn clean_block(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    let mut text = chars.as_str().to_owned();
    for marker in FOOTNOTE_MARKERS {
        text = text.replace(marker, "");
    }
    space_entries(&text)
}

/// Adds a blank line after each line ending in `;` (trailing spaces allowed), so `"; \n"` becomes `"; \n\n"`.
fn space_entries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for line in text.split_inclusive('\n') {
        out.push_str(line);
        if let Some(content) = line.strip_suffix('\n') {
            if content.trim_end_matches(' ').ends_with(';') {
                out.push('\n');
            }
        }
    }
    out
}

/// Builds the outcome from both classified results. `word` feeds the title and diagnostic.
pub fn format_outcome(word: &str, results: ByDirection<ClassifiedResult>) -> TranslationOutcome {
    let formatted = results.map(|_, result| match result.content {
        Content::Text(raw) => Some(FormattedText::from_block(&raw)),
        Content::Empty => None,
    });
    TranslationOutcome::new(word, formatted.latin_to_english, formatted.english_to_latin)
}
