//! Kramdown attribute lists and MultiMarkdown metadata through the whole pipeline.

use md_babel::{convert, ConversionOptions, DialectId};

fn run(input: &str, source: DialectId, target: DialectId) -> String {
    convert(input, source, target, &ConversionOptions::default()).unwrap()
}

#[test]
fn test_kramdown_attribute_list_survives() {
    assert_eq!(
        run("Para\n{: .note}\n", DialectId::Kramdown, DialectId::Kramdown),
        "Para\n{: .note}"
    );
    assert_eq!(
        run(
            "# Heading\n{: #intro}\n\nText",
            DialectId::Kramdown,
            DialectId::Kramdown
        ),
        "# Heading\n{: #intro}\n\nText"
    );
}

#[test]
fn test_kramdown_attribute_list_inside_list_item() {
    let input = "- a\n  {: .x}\n- b";
    assert_eq!(
        run(input, DialectId::Kramdown, DialectId::Kramdown),
        "- a\n  {: .x}\n- b"
    );
    assert_eq!(
        run(input, DialectId::Kramdown, DialectId::CommonMark),
        "- a\n- b"
    );
}

#[test]
fn test_kramdown_attribute_list_stripped_for_commonmark() {
    assert_eq!(
        run("Para\n{: .note}\n\nNext", DialectId::Kramdown, DialectId::CommonMark),
        "Para\n\nNext"
    );
}

#[test]
fn test_multimarkdown_metadata_survives() {
    let input = "Title: Notes\nAuthor: Ada\n\n# Body\n";
    assert_eq!(
        run(input, DialectId::MultiMarkdown, DialectId::MultiMarkdown),
        "Title: Notes\nAuthor: Ada\n\n# Body"
    );
}

#[test]
fn test_multimarkdown_metadata_stripped_for_commonmark() {
    let input = "Title: Notes\nAuthor: Ada\n\n# Body\n";
    assert_eq!(
        run(input, DialectId::MultiMarkdown, DialectId::CommonMark),
        "# Body"
    );
}

#[test]
fn test_metadata_is_only_recognised_at_the_start() {
    let input = "# Body\n\nTitle: Not metadata\n";
    assert_eq!(
        run(input, DialectId::MultiMarkdown, DialectId::MultiMarkdown),
        "# Body\n\nTitle: Not metadata"
    );
}
