//! Reflow properties and edge cases.

use md_babel::common::reflow::reflow;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-z]{1,12}",
        1 => Just("-".to_string()),
        1 => Just("*".to_string()),
        1 => Just("#".to_string()),
        1 => Just("##".to_string()),
        1 => Just("1.".to_string()),
        1 => Just(">".to_string()),
        1 => Just("|".to_string()),
        1 => Just("===".to_string()),
        1 => Just("---".to_string()),
        1 => Just("```x".to_string()),
        1 => Just("_a_".to_string()),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => prop::collection::vec(word_strategy(), 1..10).prop_map(|words| words.join(" ")),
        2 => Just(String::new()),
        1 => Just("# Heading line".to_string()),
        1 => Just("- list item".to_string()),
        1 => Just("2. ordered item".to_string()),
        1 => Just("| a | b |".to_string()),
        1 => Just("```".to_string()),
        1 => Just("~~~".to_string()),
        1 => Just("> quoted text".to_string()),
        1 => Just("===".to_string()),
        1 => Just("---".to_string()),
        1 => Just("    # indented".to_string()),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..16).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_reflow_is_stable(doc in document_strategy(), width in 8usize..40) {
        let once = reflow(&doc, width);
        let twice = reflow(&once, width);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_reflow_keeps_fenced_blocks(
        before in prop::collection::vec("[a-z]{1,10}", 0..12),
        code in prop::collection::vec("[a-z #>|-]{0,30}", 0..6),
        after in prop::collection::vec("[a-z]{1,10}", 0..12),
        width in 8usize..30,
    ) {
        let block = format!("```\n{}\n```", code.join("\n"));
        let doc = format!("{}\n{}\n{}", before.join(" "), block, after.join(" "));
        let out = reflow(&doc, width);
        prop_assert!(out.contains(&block), "fenced block changed:\n{}", out);
    }

    #[test]
    fn test_reflow_keeps_nested_fences(
        before in prop::collection::vec("[a-z]{1,10}", 0..12),
        code in prop::collection::vec(prop_oneof![
            3 => "[a-z #>|-]{0,30}",
            1 => Just("```".to_string()),
            1 => Just("```rust".to_string()),
            1 => Just("~~~".to_string()),
        ], 0..6),
        outer in prop_oneof![Just("````"), Just("~~~"), Just("~~~~~")],
        after in prop::collection::vec("[a-z]{1,10}", 0..12),
        width in 8usize..30,
    ) {
        // a tilde line of the outer length would legitimately close a tilde fence
        prop_assume!(!(outer.starts_with('~') && code.iter().any(|line| line.starts_with("~~~") && line.len() >= outer.len())));
        let block = format!("{outer}\n{}\n{outer}", code.join("\n"));
        let doc = format!("{}\n{}\n{}", before.join(" "), block, after.join(" "));
        let out = reflow(&doc, width);
        prop_assert!(out.contains(&block), "fenced block changed:\n{}", out);
    }

    #[test]
    fn test_reflow_keeps_words_in_order(
        words in prop::collection::vec("[a-z]{1,10}", 1..30),
        width in 8usize..30,
    ) {
        let text = words.join(" ");
        let out = reflow(&text, width);
        let rewrapped: Vec<&str> = out.split_whitespace().collect();
        prop_assert_eq!(rewrapped, words.iter().map(String::as_str).collect::<Vec<_>>());
        for line in out.lines() {
            prop_assert!(line.chars().count() <= width || !line.contains(' '));
        }
    }
}

#[test]
fn test_wrapped_paragraph_between_structure() {
    let text = "# Heading\nalpha beta gamma delta epsilon\n- item";
    assert_eq!(
        reflow(text, 12),
        "# Heading\nalpha beta\ngamma delta\nepsilon\n- item"
    );
}

#[test]
fn test_paragraph_that_would_become_structure_is_left_alone() {
    // the first line can only start with `#`, which wraps into a heading
    let text = "    # aaaa bbbb cccc";
    assert_eq!(reflow(text, 8), text);
}

#[test]
fn test_blank_lines_preserved() {
    let text = "a b\n\n\nc d";
    assert_eq!(reflow(text, 80), text);
}
