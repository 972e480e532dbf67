//! Classifier behaviour on realistic serializer output.

use md_babel::common::classify::{classify, classify_with_next, is_blank, LineKind};

fn kinds(text: &str) -> Vec<LineKind> {
    let lines: Vec<&str> = text.split('\n').collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !is_blank(line))
        .map(|(i, line)| classify_with_next(line, lines.get(i + 1).copied()))
        .collect()
}

#[test]
fn test_document_lines() {
    let doc = "# Title\n\nIntro text\n\n- item\n1. first\n\n| a | b |\n| --- | --- |\n\n> quoted\n\n***\n\n```rust\ncode\n```";
    assert_eq!(
        kinds(doc),
        vec![
            LineKind::Heading,
            LineKind::Plain,
            LineKind::ListItem,
            LineKind::ListItem,
            LineKind::TableRow,
            LineKind::TableRow,
            LineKind::BlockquoteStart,
            LineKind::ThematicBreak,
            LineKind::FenceDelimiter,
            LineKind::Plain,
            LineKind::FenceDelimiter,
        ]
    );
}

#[test]
fn test_setext_document() {
    assert_eq!(
        kinds("Title\n=====\n\nBody"),
        vec![LineKind::Heading, LineKind::Plain, LineKind::Plain]
    );
}

#[test]
fn test_fence_wins_over_everything() {
    assert_eq!(classify("```- not a list"), LineKind::FenceDelimiter);
    assert_eq!(classify("~~~ # not a heading"), LineKind::FenceDelimiter);
}

#[test]
fn test_escaped_syntax_is_plain() {
    assert_eq!(classify("\\# not a heading"), LineKind::Plain);
    assert_eq!(classify("\\- not a list"), LineKind::Plain);
    assert_eq!(classify("1\\. not a list"), LineKind::Plain);
    assert_eq!(classify("\\> not a quote"), LineKind::Plain);
}
