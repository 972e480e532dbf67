//! Element rules for the HTML → Markdown serializer
//!
//! Rules are checked before the built-in element handling, in order, and the first rule
//! whose [`ElementRule::matches`] returns true decides the element's Markdown. The
//! serializer hands the rule the element's already serialized content.

use crate::dialects::markers::SPOILER_ATTR;
use crate::formats::SerializeOptions;

/// Tag name and attributes of an HTML element, detached from the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Lowercase tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// A custom HTML → Markdown conversion for some elements
pub trait ElementRule: Send + Sync {
    fn name(&self) -> &str;

    fn matches(&self, element: &Element) -> bool;

    /// Markdown for the element, given its serialized content
    fn replacement(&self, element: &Element, content: &str, options: &SerializeOptions)
        -> String;
}

/// `<span data-spoiler>` → `||content||`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpoilerRule;

impl ElementRule for SpoilerRule {
    fn name(&self) -> &str {
        "spoiler"
    }

    fn matches(&self, element: &Element) -> bool {
        element.tag() == "span" && element.has_attr(SPOILER_ATTR)
    }

    fn replacement(&self, _element: &Element, content: &str, _options: &SerializeOptions) -> String {
        format!("||{content}||")
    }
}

/// The rules every [`DomSerializer`](super::DomSerializer) starts with
pub fn default_rules() -> Vec<Box<dyn ElementRule>> {
    vec![Box::new(SpoilerRule)]
}
