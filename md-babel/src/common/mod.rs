//! Text-level passes shared by every conversion.
//!
//! These work on Markdown as lines of text, after the serializer has produced it:
//! classifying lines, re-wrapping paragraphs and tightening lists.

pub mod classify;
pub mod reflow;
pub mod tighten;

/// Normalize CRLF line endings to LF. Lone carriage returns are left alone.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
