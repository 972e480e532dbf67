//! Kramdown attribute lists and MultiMarkdown metadata at the rule level.

use md_babel::{DialectId, DialectRegistry};

#[test]
fn test_kramdown_rules_round_trip() {
    let registry = DialectRegistry::default();
    let text = "# Heading\n{: #intro}\n\nPara\n{: .lead}\n";
    let neutral = registry.apply_ingest(DialectId::Kramdown, text).unwrap();
    assert_eq!(
        neutral,
        "# Heading\n<!--kramdown-attrlist:{: #intro}-->\n\nPara\n<!--kramdown-attrlist:{: .lead}-->\n"
    );
    assert_eq!(
        registry.apply_emit(DialectId::Kramdown, &neutral).unwrap(),
        text
    );
}

#[test]
fn test_multimarkdown_rules_round_trip() {
    let registry = DialectRegistry::default();
    let text = "Title: Report\nAuthor: Grace Hopper\nBase Header Level: 2\n\nBody text\n";
    let neutral = registry
        .apply_ingest(DialectId::MultiMarkdown, text)
        .unwrap();
    assert!(neutral.starts_with("<!--mmd-meta-start\n"));
    assert!(neutral.contains("mmd-meta-end-->\n\nBody text"));
    assert_eq!(
        registry
            .apply_emit(DialectId::MultiMarkdown, &neutral)
            .unwrap(),
        text
    );
}

#[test]
fn test_commonmark_strips_markers_of_other_dialects() {
    let registry = DialectRegistry::default();
    let neutral = "<!--mmd-meta-start\nTitle: A\nmmd-meta-end-->\n\nPara\n\n<!--kramdown-attrlist:{: .x}-->";
    assert_eq!(
        registry.apply_emit(DialectId::CommonMark, neutral).unwrap(),
        "Para"
    );
}

#[test]
fn test_gfm_keeps_markers() {
    let registry = DialectRegistry::default();
    let neutral = "Para\n\n<!--kramdown-attrlist:{: .x}-->";
    assert_eq!(registry.apply_emit(DialectId::Gfm, neutral).unwrap(), neutral);
}
