//! The conversion pipeline
//!
//! raw input → preprocess (source ingest rules) → render → serialize → postprocess
//! (target emit rules) → reflow (optional) → tighten (optional) → output
//!
//! Every stage takes text and returns new text. The whole run is described by one
//! immutable [`ConvertRequest`]; nothing is read from ambient state.

use crate::common::normalize_newlines;
use crate::common::reflow::reflow;
use crate::common::tighten::tighten;
use crate::dialect::DialectId;
use crate::error::ConvertError;
use crate::formats::{
    ComrakRenderer, DomSerializer, HeadingStyle, HtmlSerializer, MarkdownRenderer, RenderOptions,
    SerializeOptions,
};
use crate::registry::DialectRegistry;
use serde::{Deserialize, Serialize};

/// Narrowest accepted wrap width
pub const MIN_WRAP_WIDTH: usize = 8;
/// Widest accepted wrap width
pub const MAX_WRAP_WIDTH: usize = 1024;

/// Output shaping options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Re-wrap paragraphs to this many columns; `None` or `Some(0)` leaves them alone
    pub wrap_width: Option<usize>,
    /// Remove blank lines between items of the same list
    pub tighten_lists: bool,
    /// Underline level 1 and 2 headings instead of prefixing `#`
    pub use_setext_headings: bool,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    pub fn with_tight_lists(mut self, tighten: bool) -> Self {
        self.tighten_lists = tighten;
        self
    }

    pub fn with_setext_headings(mut self, setext: bool) -> Self {
        self.use_setext_headings = setext;
        self
    }

    /// The wrap width to apply, if reflow is enabled at all
    pub fn effective_wrap_width(&self) -> Option<usize> {
        self.wrap_width.filter(|&width| width > 0)
    }

    /// Reject a non-zero wrap width outside `MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH`
    pub fn validate(&self) -> Result<(), ConvertError> {
        match self.effective_wrap_width() {
            Some(width) if !(MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH).contains(&width) => {
                Err(ConvertError::InvalidWrapWidth {
                    width,
                    min: MIN_WRAP_WIDTH,
                    max: MAX_WRAP_WIDTH,
                })
            }
            _ => Ok(()),
        }
    }

    /// Serializer options implied by these conversion options
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            heading_style: if self.use_setext_headings {
                HeadingStyle::Setext
            } else {
                HeadingStyle::Atx
            },
            ..SerializeOptions::default()
        }
    }
}

/// Everything one conversion needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input: String,
    pub source: DialectId,
    pub target: DialectId,
    pub options: ConversionOptions,
}

impl ConvertRequest {
    pub fn new(input: impl Into<String>, source: DialectId, target: DialectId) -> Self {
        ConvertRequest {
            input: input.into(),
            source,
            target,
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Normalize line endings, then rewrite the source dialect's syntax into neutral Markdown.
pub fn preprocess(
    registry: &DialectRegistry,
    input: &str,
    source: DialectId,
) -> Result<String, ConvertError> {
    registry.apply_ingest(source, &normalize_newlines(input))
}

/// Normalize line endings, then rewrite neutral Markdown into the target dialect's syntax.
pub fn postprocess(
    registry: &DialectRegistry,
    markdown: &str,
    target: DialectId,
) -> Result<String, ConvertError> {
    registry.apply_emit(target, &normalize_newlines(markdown))
}

/// Runs conversions with a given renderer and serializer
pub struct Converter<R = ComrakRenderer, S = DomSerializer> {
    registry: DialectRegistry,
    renderer: R,
    serializer: S,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(ComrakRenderer, DomSerializer::default())
    }
}

impl<R: MarkdownRenderer, S: HtmlSerializer> Converter<R, S> {
    pub fn new(renderer: R, serializer: S) -> Self {
        Converter {
            registry: DialectRegistry::with_defaults(),
            renderer,
            serializer,
        }
    }

    /// Replace the dialect registry
    pub fn with_registry(mut self, registry: DialectRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run the whole pipeline. Options are validated before any stage runs.
    pub fn run(&self, request: &ConvertRequest) -> Result<String, ConvertError> {
        let options = &request.options;
        options.validate()?;
        log::debug!(
            "converting {} bytes: {} -> {}",
            request.input.len(),
            request.source,
            request.target
        );

        let neutral = preprocess(&self.registry, &request.input, request.source)?;
        log::debug!("preprocess: {} bytes", neutral.len());

        let html = self.renderer.render(&neutral, &RenderOptions::default())?;
        log::debug!("render: {} bytes of html", html.len());

        let markdown = self
            .serializer
            .serialize(&html, &options.serialize_options())?;
        log::debug!("serialize: {} bytes", markdown.len());

        let mut output = postprocess(&self.registry, &markdown, request.target)?;
        log::debug!("postprocess: {} bytes", output.len());

        if let Some(width) = options.effective_wrap_width() {
            output = reflow(&output, width);
            log::debug!("reflow at {width}: {} bytes", output.len());
        }
        if options.tighten_lists {
            output = tighten(&output);
            log::debug!("tighten: {} bytes", output.len());
        }

        Ok(output)
    }
}

/// Convert `input` from `source` to `target` with the default collaborators.
///
/// # Examples
///
/// ```ignore
/// let out = convert("[[Page|Alias]]", DialectId::Obsidian, DialectId::CommonMark,
///     &ConversionOptions::default())?;
/// assert_eq!(out, "[Alias](Page)");
/// ```
pub fn convert(
    input: &str,
    source: DialectId,
    target: DialectId,
    options: &ConversionOptions,
) -> Result<String, ConvertError> {
    let request = ConvertRequest::new(input, source, target).with_options(options.clone());
    let converter: Converter = Converter::default();
    converter.run(&request)
}
