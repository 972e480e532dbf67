//! Pass-through markers
//!
//! Neutral placeholders that carry dialect-only content across the render/serialize
//! boundary. Spoilers travel as an inline `<span>`, which the serializer knows how to
//! turn back into `||text||`. Kramdown attribute lists and MultiMarkdown metadata travel
//! as HTML comments, which the renderer passes through as raw HTML blocks and the
//! serializer keeps verbatim.
//!
//! A metadata marker is a single comment spanning several lines so the block survives as
//! one unit: `<!--mmd-meta-start` opens it and `mmd-meta-end-->` closes it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Attribute marking a spoiler span
pub const SPOILER_ATTR: &str = "data-spoiler";
pub const KRAMDOWN_ATTRLIST_PREFIX: &str = "<!--kramdown-attrlist:";
pub const MMD_META_START: &str = "<!--mmd-meta-start";
pub const MMD_META_END: &str = "mmd-meta-end-->";

/// `||payload||`, shortest match, may span lines
pub static SPOILER_PIPES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\|\|(.*?)\|\|").unwrap());

/// `<span data-spoiler>payload</span>`
pub static SPOILER_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<span data-spoiler>(.*?)</span>").unwrap());

/// A line holding only a kramdown attribute list such as `{: .note #intro}`.
/// The indentation is captured so a list item keeps its attribute list.
pub static KRAMDOWN_ATTRLIST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)(\{:[^}]+\})[ \t]*$").unwrap());

/// A wrapped attribute list
pub static KRAMDOWN_ATTRLIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--kramdown-attrlist:(\{:[^}]+\})-->").unwrap());

/// A whole line holding a wrapped attribute list, with the newlines before it
pub static KRAMDOWN_ATTRLIST_MARKER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\n*^[ \t]*<!--kramdown-attrlist:[^\n]*?-->$").unwrap());

/// A wrapped attribute list separated from the block before it by a blank line
pub static KRAMDOWN_ATTRLIST_DETACHED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n([ \t]*<!--kramdown-attrlist:\{:[^}]+\}-->)").unwrap());

/// `Key: value` lines at the very start of a document, then a blank line
pub static MMD_META_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(?:[A-Za-z][A-Za-z0-9 _-]*:[ \t].*\n)+\n").unwrap());

/// A wrapped metadata block; group 1 holds the metadata lines
pub static MMD_META_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--mmd-meta-start\n(.*?)mmd-meta-end-->\n?").unwrap());

/// A wrapped metadata block at the start of a line plus any blank lines after it
pub static MMD_META_MARKER_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^<!--mmd-meta-start\n.*?mmd-meta-end-->\n*").unwrap());

pub fn wrap_spoiler(caps: &Captures) -> String {
    format!("<span {SPOILER_ATTR}>{}</span>", &caps[1])
}

pub fn unwrap_spoiler(caps: &Captures) -> String {
    format!("||{}||", &caps[1])
}

pub fn wrap_attrlist(caps: &Captures) -> String {
    format!("{}{KRAMDOWN_ATTRLIST_PREFIX}{}-->", &caps[1], &caps[2])
}

/// Wrap a metadata block; the trailing blank line is kept after the marker.
pub fn wrap_meta(caps: &Captures) -> String {
    let block = &caps[0];
    let lines = block.strip_suffix('\n').unwrap_or(block);
    format!("{MMD_META_START}\n{lines}{MMD_META_END}\n\n")
}
