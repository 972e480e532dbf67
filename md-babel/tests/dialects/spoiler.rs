//! Discord and Reddit spoiler round trips.

use md_babel::{DialectId, DialectRegistry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_spoiler_round_trip(
        payload in "[a-zA-Z0-9 .,!?\n]{0,30}",
        dialect in prop_oneof![Just(DialectId::Discord), Just(DialectId::Reddit)],
    ) {
        let registry = DialectRegistry::default();
        let text = format!("before ||{payload}|| after");
        let neutral = registry.apply_ingest(dialect, &text).unwrap();
        prop_assert!(!neutral.contains("||"));
        prop_assert_eq!(registry.apply_emit(dialect, &neutral).unwrap(), text);
    }
}

#[test]
fn test_spoiler_shortest_match() {
    let registry = DialectRegistry::default();
    assert_eq!(
        registry
            .apply_ingest(DialectId::Discord, "||a|| and ||b||")
            .unwrap(),
        "<span data-spoiler>a</span> and <span data-spoiler>b</span>"
    );
}

#[test]
fn test_spoiler_spans_lines() {
    let registry = DialectRegistry::default();
    assert_eq!(
        registry
            .apply_ingest(DialectId::Reddit, "||line one\nline two||")
            .unwrap(),
        "<span data-spoiler>line one\nline two</span>"
    );
}

#[test]
fn test_unpaired_pipes_untouched() {
    let registry = DialectRegistry::default();
    let text = "a || b";
    assert_eq!(
        registry.apply_ingest(DialectId::Discord, text).unwrap(),
        text
    );
}
