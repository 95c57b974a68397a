//! Turns a [`TranslationOutcome`] into reply text.
//!
//! [`render_markdown`] produces Telegram MarkdownV2 for chat replies; [`render_plain`] is the
//! same layout without escaping, for the `lookup` command.

use teloxide::utils::markdown::{escape, escape_code};
use whitaker::{TranslationOutcome, CODE_FENCE};

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Per-section cap, measured after escaping, so both directions plus the title fit in one message.
pub const MAX_SECTION_CHARS: usize = 1700;

/// Longest word shown in a reply title. Escaping can double it.
pub const MAX_TITLE_WORD_CHARS: usize = 200;

const TRUNCATED: &str = "\n…";

/// MarkdownV2 reply: bold title, then each section's label and a code block, or the
/// diagnostic in a code block when nothing was found. Never longer than [`MAX_MESSAGE_CHARS`].
pub fn render_markdown(outcome: &TranslationOutcome) -> String {
    let title = outcome.short_title(MAX_TITLE_WORD_CHARS);
    let mut out = format!("*{}*\n", escape(&title));

    match outcome.diagnostic() {
        None => {
            for section in outcome.sections() {
                out.push_str(&format!(
                    "\n*{}:*\n{}\n",
                    escape(section.label()),
                    code_block(&escape_section(section.text.body(), MAX_SECTION_CHARS))
                ));
            }
        }
        Some(diagnostic) => {
            out.push('\n');
            out.push_str(&code_block(&escape_code(&diagnostic.to_string())));
        }
    }

    out
}

/// Unescaped variant of [`render_markdown`] for terminals.
pub fn render_plain(outcome: &TranslationOutcome) -> String {
    let mut out = format!("{}\n", outcome.title());

    match outcome.diagnostic() {
        None => {
            for section in outcome.sections() {
                out.push_str(&format!("\n{}:\n{}\n", section.label(), section.text.fenced()));
            }
        }
        Some(diagnostic) => {
            out.push('\n');
            out.push_str(&code_block(&diagnostic.to_string()));
            out.push('\n');
        }
    }

    out
}

fn code_block(body: &str) -> String {
    format!(
        "{fence}\n{}\n{fence}",
        body.trim_end_matches('\n'),
        fence = CODE_FENCE
    )
}

/// Chars `c` occupies once escaped for a MarkdownV2 code block.
fn escaped_width(c: char) -> usize {
    match c {
        '`' | '\\' => 2,
        _ => 1,
    }
}

/// Escapes `body` for a code block, cutting it so the escaped text is at most `max` chars.
///
/// The cut happens on the raw text, preferring the last line break, so an escape sequence is
/// never split.
fn escape_section(body: &str, max: usize) -> String {
    let escaped = escape_code(body);
    if escaped.chars().count() <= max {
        return escaped;
    }

    let budget = max.saturating_sub(TRUNCATED.chars().count());
    let mut width = 0;
    let mut cut = 0;
    for (idx, c) in body.char_indices() {
        width += escaped_width(c);
        if width > budget {
            break;
        }
        cut = idx + c.len_utf8();
    }

    let head = &body[..cut];
    let head = match head.rfind('\n') {
        Some(nl) if nl > 0 => &head[..nl],
        _ => head,
    };
    format!("{}{}", escape_code(head), TRUNCATED)
}
