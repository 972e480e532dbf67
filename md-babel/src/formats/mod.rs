//! Render and serialize collaborators
//!
//! Conversion pivots through HTML: the neutral Markdown is rendered to HTML by a
//! [`MarkdownRenderer`], and the HTML is serialized back to Markdown by an
//! [`HtmlSerializer`]. Both are traits so a caller can swap either side; the defaults are
//! [`ComrakRenderer`] and [`DomSerializer`].

pub mod html;
pub mod markdown;

use crate::error::ConvertError;

pub use html::ComrakRenderer;
pub use markdown::{DomSerializer, Element, ElementRule, SpoilerRule};

/// Options handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pass raw HTML through instead of escaping it
    pub html: bool,
    /// Turn bare URLs into links
    pub linkify: bool,
    /// Render soft line breaks as `<br>`
    pub breaks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            html: true,
            linkify: true,
            breaks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockStyle {
    #[default]
    Fenced,
    Indented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// `# Title`
    #[default]
    Atx,
    /// `Title` underlined with `=` or `-` (levels 1 and 2 only)
    Setext,
}

/// Options handed to the serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    pub code_block_style: CodeBlockStyle,
    pub em_delimiter: String,
    pub strong_delimiter: String,
    pub bullet_list_marker: char,
    pub heading_style: HeadingStyle,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            code_block_style: CodeBlockStyle::Fenced,
            em_delimiter: "_".to_string(),
            strong_delimiter: "**".to_string(),
            bullet_list_marker: '-',
            heading_style: HeadingStyle::Atx,
        }
    }
}

/// Renders Markdown to HTML
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str, options: &RenderOptions) -> Result<String, ConvertError>;
}

/// Serializes HTML back to Markdown
pub trait HtmlSerializer {
    fn serialize(&self, html: &str, options: &SerializeOptions) -> Result<String, ConvertError>;
}
