//! Custom renderers and serializers plugged into the converter.

use md_babel::dialects::GfmDialect;
use md_babel::{
    ConvertError, ConvertRequest, Converter, DialectId, DialectRegistry, DomSerializer,
    HtmlSerializer, MarkdownRenderer, RenderOptions, SerializeOptions,
};
use std::cell::RefCell;

/// Records what it was asked to render and returns fixed HTML
#[derive(Default)]
struct RecordingRenderer {
    seen: RefCell<Vec<String>>,
}

impl MarkdownRenderer for RecordingRenderer {
    fn render(&self, markdown: &str, options: &RenderOptions) -> Result<String, ConvertError> {
        assert!(options.html);
        assert!(options.linkify);
        assert!(!options.breaks);
        self.seen.borrow_mut().push(markdown.to_string());
        Ok("<p>fixed</p>".to_string())
    }
}

struct UpperSerializer;

impl HtmlSerializer for UpperSerializer {
    fn serialize(&self, html: &str, _options: &SerializeOptions) -> Result<String, ConvertError> {
        Ok(html.to_uppercase())
    }
}

struct BrokenSerializer;

impl HtmlSerializer for BrokenSerializer {
    fn serialize(&self, _html: &str, _options: &SerializeOptions) -> Result<String, ConvertError> {
        Err(ConvertError::Serialize("bad tree".to_string()))
    }
}

#[test]
fn test_renderer_receives_neutral_markdown() {
    let converter = Converter::new(RecordingRenderer::default(), DomSerializer::default());
    let request = ConvertRequest::new("[[Page]]\r\n", DialectId::Obsidian, DialectId::Gfm);
    assert_eq!(converter.run(&request).unwrap(), "fixed");
    assert_eq!(
        *converter.renderer().seen.borrow(),
        vec!["[Page](Page)\n".to_string()]
    );
}

#[test]
fn test_emit_rules_run_on_serializer_output() {
    let converter = Converter::new(md_babel::ComrakRenderer, UpperSerializer);
    let request = ConvertRequest::new("x", DialectId::Gfm, DialectId::Gfm);
    assert_eq!(converter.run(&request).unwrap(), "<P>X</P>\n");
}

#[test]
fn test_serializer_error_surfaces_unchanged() {
    let converter = Converter::new(md_babel::ComrakRenderer, BrokenSerializer);
    let request = ConvertRequest::new("x", DialectId::Gfm, DialectId::Gfm);
    assert_eq!(
        converter.run(&request),
        Err(ConvertError::Serialize("bad tree".to_string()))
    );
}

#[test]
fn test_custom_registry_limits_dialects() {
    let mut registry = DialectRegistry::new();
    registry.register(GfmDialect::default());
    let converter = Converter::default().with_registry(registry);

    assert_eq!(converter.registry().list_dialects(), vec![DialectId::Gfm]);
    let request = ConvertRequest::new("[[Page]]", DialectId::Obsidian, DialectId::Gfm);
    assert!(matches!(
        converter.run(&request),
        Err(ConvertError::UnknownDialect(_))
    ));

    let request = ConvertRequest::new("*a*", DialectId::Gfm, DialectId::Gfm);
    assert_eq!(converter.run(&request).unwrap(), "_a_");
}
