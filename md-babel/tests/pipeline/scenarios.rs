//! Conversions users actually run.

use md_babel::common::classify::{classify, LineKind};
use md_babel::pipeline::preprocess;
use md_babel::{convert, ConversionOptions, DialectId, DialectRegistry};

fn run(input: &str, source: DialectId, target: DialectId) -> String {
    convert(input, source, target, &ConversionOptions::default()).unwrap()
}

#[test]
fn test_wrap_long_paragraph_keeps_heading() {
    let input = "# Title\n\nSome *very* long paragraph sentence intended to exceed a narrow wrap width by a good margin.";
    let options = ConversionOptions::new().with_wrap_width(20);
    let out = convert(input, DialectId::Gfm, DialectId::Gfm, &options).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "# Title");
    assert_eq!(lines[1], "");
    for line in &lines[2..] {
        assert!(line.chars().count() <= 20, "line too long: {line:?}");
        assert_eq!(classify(line), LineKind::Plain);
    }
    assert_eq!(
        out,
        "# Title\n\nSome _very_ long\nparagraph sentence\nintended to exceed a\nnarrow wrap width by\na good margin."
    );
}

#[test]
fn test_tighten_loose_list() {
    let loose = run("- one\n\n- two", DialectId::Gfm, DialectId::Gfm);
    assert_eq!(loose, "- one\n\n- two");

    let options = ConversionOptions::new().with_tight_lists(true);
    let tight = convert("- one\n\n- two", DialectId::Gfm, DialectId::Gfm, &options).unwrap();
    assert_eq!(tight, "- one\n- two");
}

#[test]
fn test_obsidian_alias_to_commonmark() {
    let out = run("[[Page|Alias]]", DialectId::Obsidian, DialectId::CommonMark);
    assert!(out.contains("[Alias](Page)"));
    assert!(!out.contains("[["));
    assert!(!out.contains("]]"));
}

#[test]
fn test_obsidian_callout_preprocess() {
    let registry = DialectRegistry::default();
    assert_eq!(
        preprocess(&registry, "> [!note] Heads up", DialectId::Obsidian).unwrap(),
        "> **Note:** Heads up"
    );
    assert_eq!(
        run("> [!note] Heads up", DialectId::Obsidian, DialectId::Gfm),
        "> **Note:** Heads up"
    );
}

#[test]
fn test_discord_spoiler_to_reddit() {
    assert_eq!(
        run("||secret||", DialectId::Discord, DialectId::Reddit),
        "||secret||"
    );
    assert_eq!(
        run("Plot: ||he was a ghost|| all along", DialectId::Reddit, DialectId::Discord),
        "Plot: ||he was a ghost|| all along"
    );
}

#[test]
fn test_spoiler_in_table_cell() {
    assert_eq!(
        run("| a |\n|---|\n| ||x|| |", DialectId::Discord, DialectId::Discord),
        "| a |\n| --- |\n| ||x|| |"
    );
}

#[test]
fn test_obsidian_round_trip_through_pipeline() {
    let input = "See [[Home]] and [[Projects|my projects]].";
    assert_eq!(run(input, DialectId::Obsidian, DialectId::Obsidian), input);
}

#[test]
fn test_spaced_note_names_through_pipeline() {
    let commonmark = run("[[My Note]] and [[My Note|alias]]", DialectId::Obsidian, DialectId::CommonMark);
    assert_eq!(commonmark, "[My Note](My%20Note) and [alias](My%20Note)");

    assert_eq!(
        run("See [[My Note]] and ![[Big Diagram]]", DialectId::Obsidian, DialectId::Obsidian),
        "See [[My Note]] and ![[Big Diagram]]"
    );
}

#[test]
fn test_gfm_links_become_wiki_links() {
    assert_eq!(
        run("Go to [Home](Home) or [the site](https://example.com).", DialectId::Gfm, DialectId::Obsidian),
        "Go to [[Home]] or [the site](https://example.com)."
    );
}

#[test]
fn test_setext_headings() {
    let options = ConversionOptions::new().with_setext_headings(true);
    let out = convert("# Title\n\n## Sub\n\nText", DialectId::Gfm, DialectId::Gfm, &options).unwrap();
    assert_eq!(out, "Title\n=====\n\nSub\n---\n\nText");
}

#[test]
fn test_setext_headings_survive_reflow() {
    let options = ConversionOptions::new()
        .with_setext_headings(true)
        .with_wrap_width(10);
    let out = convert("# Hi\n\nsome words to wrap here", DialectId::Gfm, DialectId::Gfm, &options)
        .unwrap();
    assert_eq!(out, "Hi\n===\n\nsome words\nto wrap\nhere");
}

#[test]
fn test_crlf_input() {
    assert_eq!(
        run("line one\r\nline two\r\n", DialectId::Gfm, DialectId::Gfm),
        "line one line two"
    );
}

#[test]
fn test_code_fence_survives_wrap() {
    let input = "```rust\nfn main() { println!(\"a very long line that must not wrap\"); }\n```";
    let options = ConversionOptions::new().with_wrap_width(10);
    let out = convert(input, DialectId::Gfm, DialectId::Gfm, &options).unwrap();
    assert_eq!(out, input);
}

#[test]
fn test_nested_fence_survives_wrap() {
    let input = "~~~\n```\nlet value = compute(a, b, c);\n```\n~~~";
    let options = ConversionOptions::new().with_wrap_width(10);
    let out = convert(input, DialectId::Gfm, DialectId::Gfm, &options).unwrap();
    assert_eq!(out, "````\n```\nlet value = compute(a, b, c);\n```\n````");
}

#[test]
fn test_task_list_and_table() {
    let input = "- [x] done\n- [ ] todo\n\n| a | b |\n|---|:-:|\n| 1 | 2 |";
    assert_eq!(
        run(input, DialectId::Gfm, DialectId::Gfm),
        "- [x] done\n- [ ] todo\n\n| a | b |\n| --- | :-: |\n| 1 | 2 |"
    );
}

#[test]
fn test_highlight_becomes_bold() {
    assert_eq!(
        run("a ==key== point", DialectId::Obsidian, DialectId::Gfm),
        "a **key** point"
    );
}
