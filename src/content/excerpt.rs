//! Plain-text excerpts and reading time.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Average adult reading speed, words per minute.
const WORDS_PER_MINUTE: usize = 265;

/// Extract readable text from markdown.
///
/// Keeps text and inline code, turns line breaks and block ends into
/// spaces, and collapses runs of whitespace.
pub fn plain_text(markdown: &str) -> String {
    let mut raw = String::with_capacity(markdown.len());

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => raw.push_str(&text),
            Event::SoftBreak | Event::HardBreak => raw.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => raw.push(' '),
            _ => {}
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prune `text` to at most `length` characters plus an ellipsis.
///
/// Cuts at the last word boundary inside the limit; text that already fits
/// is returned unchanged.
pub fn prune(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    // Byte offset of the first char past the limit
    let cut = text
        .char_indices()
        .nth(length)
        .map_or(text.len(), |(i, _)| i);
    let head = &text[..cut];

    // Cutting inside a word drops the partial word
    let mid_word = text[cut..]
        .chars()
        .next()
        .is_some_and(char::is_alphanumeric);
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if mid_word => &head[..space],
        _ => head,
    };

    let head = head.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    format!("{head}…")
}

/// Minutes needed to read `text`, rounded, at least one.
pub fn time_to_read(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = (words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE;
    u32::try_from(minutes.max(1)).unwrap_or(u32::MAX)
}
