//! Preview projection
//!
//! Display-only: makes converted output readable as HTML. Spoilers become styled spans and,
//! for Obsidian, wiki-links become ordinary links so they render as anchors. The projected
//! Markdown is never fed back into a conversion.

use crate::dialect::DialectId;
use crate::dialects::markers;
use crate::dialects::obsidian::link_destination;
use crate::error::ConvertError;
use crate::formats::{MarkdownRenderer, RenderOptions};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ALIASED_WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^|\]]+?)\|([^\]]+?)\]\]").unwrap());
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+?)\]\]").unwrap());

/// Rewrite dialect syntax the renderer would not understand into something it does.
pub fn project(markdown: &str, target: DialectId) -> String {
    let mut text = markdown.to_string();
    if target == DialectId::Obsidian {
        text = ALIASED_WIKI_LINK
            .replace_all(&text, |caps: &Captures| {
                format!("[{}]({})", &caps[2], link_destination(&caps[1]))
            })
            .into_owned();
        text = WIKI_LINK
            .replace_all(&text, |caps: &Captures| {
                format!("[{}]({})", &caps[1], link_destination(&caps[1]))
            })
            .into_owned();
    }
    markers::SPOILER_PIPES
        .replace_all(&text, markers::wrap_spoiler)
        .into_owned()
}

/// Project `markdown`, render it, and style spoilers.
pub fn render_preview<R: MarkdownRenderer + ?Sized>(
    markdown: &str,
    target: DialectId,
    renderer: &R,
) -> Result<String, ConvertError> {
    let projected = project(markdown, target);
    let html = renderer.render(&projected, &RenderOptions::default())?;
    Ok(markers::SPOILER_SPAN
        .replace_all(&html, r#"<span class="spoiler" title="Spoiler">${1}</span>"#)
        .into_owned())
}
