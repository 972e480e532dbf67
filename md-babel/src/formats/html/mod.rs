//! Markdown → HTML rendering
//!
//! # Library Choice
//!
//! We use the `comrak` crate: CommonMark compliant, with the GFM extensions the neutral
//! form relies on (tables, strikethrough, task lists, autolinks), and it passes raw HTML
//! through untouched when asked to. Raw HTML pass-through is what carries the
//! dialect markers (spoiler spans, attribute-list and metadata comments) to the serializer.

use super::{MarkdownRenderer, RenderOptions};
use crate::error::ConvertError;
use comrak::{markdown_to_html, Options};

/// Default renderer, backed by comrak
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakRenderer;

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, markdown: &str, options: &RenderOptions) -> Result<String, ConvertError> {
        let html = markdown_to_html(markdown, &comrak_options(options));
        log::trace!("rendered {} bytes of markdown to {} bytes of html", markdown.len(), html.len());
        Ok(html)
    }
}

fn comrak_options(options: &RenderOptions) -> Options<'static> {
    let mut comrak = Options::default();
    comrak.extension.table = true;
    comrak.extension.strikethrough = true;
    comrak.extension.tasklist = true;
    comrak.extension.autolink = options.linkify;
    comrak.render.unsafe_ = options.html;
    comrak.render.hardbreaks = options.breaks;
    comrak
}
