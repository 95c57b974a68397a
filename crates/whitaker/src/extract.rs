//! HTML extractor: the dictionary payload lives in the first `<pre>` of the page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::ParseFailure;
use crate::fetch::RawPage;

static PRE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("pre").expect("`pre` is a valid selector"));

/// Returns the immediate text content of the first `<pre>` element.
///
/// Only the first child node is taken. The block is returned as served: the HTML parser drops a
/// newline that directly follows `<pre>`, so it is put back here.
pub fn extract_block(page: &RawPage) -> Result<String, ParseFailure> {
    let document = Html::parse_document(page.as_str());
    let pre = document.select(&PRE).next().ok_or(ParseFailure::MissingBlock)?;
    let first = pre.first_child().ok_or(ParseFailure::EmptyBlock)?;

    let block = match first.value() {
        Node::Text(text) => {
            let text: &str = text;
            if dropped_leading_newline(page.as_str(), text) {
                format!("\n{}", text)
            } else {
                text.to_owned()
            }
        }
        _ => ElementRef::wrap(first)
            .map(|element| element.text().collect::<String>())
            .unwrap_or_default(),
    };

    if block.is_empty() {
        return Err(ParseFailure::EmptyBlock);
    }
    Ok(block)
}

/// Whether the served markup has a `<pre>` start tag followed by a line break and then `text`.
///
/// Tags are matched against the parsed text rather than taken by position, so a `<pre>` inside a
/// script literal or comment ahead of the real block is not mistaken for it.
fn dropped_leading_newline(body: &str, text: &str) -> bool {
    let literal = leading_literal(text);
    pre_content_offsets(body).into_iter().any(|offset| {
        let content = &body[offset..];
        content
            .strip_prefix("\r\n")
            .or_else(|| content.strip_prefix('\n'))
            .is_some_and(|rest| rest.starts_with(literal))
    })
}

/// Prefix of `text` that appears verbatim in the markup: stops before entities and line breaks
/// (the parser decodes the former and normalizes the latter).
fn leading_literal(text: &str) -> &str {
    let end = text.find(|c| c == '&' || c == '\n').unwrap_or(text.len());
    &text[..end]
}

/// Byte offsets just past each `<pre ...>` start tag in `body`.
fn pre_content_offsets(body: &str) -> Vec<usize> {
    // ASCII lowercasing keeps byte offsets aligned with `body`.
    let lowered = body.to_ascii_lowercase();
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find("<pre") {
        let name_end = from + pos + "<pre".len();
        from = name_end;
        // e.g. `<preface>`
        if !matches!(
            lowered.as_bytes().get(name_end),
            Some(b'>' | b' ' | b'\t' | b'\n' | b'\r' | b'/')
        ) {
            continue;
        }
        match lowered[name_end..].find('>') {
            Some(close) => offsets.push(name_end + close + 1),
            None => break,
        }
    }
    offsets
}
