//! Tightener properties.

use md_babel::common::tighten::tighten;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just(String::new()),
        2 => Just("- bullet".to_string()),
        1 => Just("* star".to_string()),
        1 => Just("+ plus".to_string()),
        2 => Just("1. first".to_string()),
        1 => Just("10. tenth".to_string()),
        1 => Just("  - nested".to_string()),
        1 => Just("-".to_string()),
        1 => Just("- ".to_string()),
        2 => "[a-z ]{1,12}",
    ]
}

proptest! {
    #[test]
    fn test_tighten_is_idempotent(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let doc = lines.join("\n");
        let once = tighten(&doc);
        prop_assert_eq!(tighten(&once), once);
    }

    #[test]
    fn test_tighten_only_removes_empty_lines(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let doc = lines.join("\n");
        let out = tighten(&doc);
        let kept: Vec<&str> = doc.split('\n').filter(|line| !line.is_empty()).collect();
        let left: Vec<&str> = out.split('\n').filter(|line| !line.is_empty()).collect();
        prop_assert_eq!(kept, left);
    }
}

#[test]
fn test_loose_list_in_document() {
    let doc = "Intro\n\n- one\n\n- two\n\n- three\n\nOutro";
    assert_eq!(tighten(doc), "Intro\n\n- one\n- two\n- three\n\nOutro");
}
