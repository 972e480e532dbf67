//! List tightening
//!
//! Removes the single empty line between two consecutive items of the same list family,
//! turning a loose list into a tight one. Bullets (`-`, `*`, `+`) and ordered markers
//! (`1.`) are separate families; an empty line between a bullet and an ordered item is
//! kept.

use super::classify::{list_marker, ListFamily};

/// Collapse loose lists into tight ones. Idempotent.
pub fn tighten(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());

    for (i, &line) in lines.iter().enumerate() {
        if line.is_empty() && i > 0 {
            if let (Some(family), Some(&next)) = (item_with_content(lines[i - 1]), lines.get(i + 1))
            {
                if list_marker(next) == Some(family) {
                    continue;
                }
            }
        }
        out.push(line);
    }

    out.join("\n")
}

/// The family of a list item line that carries text after its marker.
fn item_with_content(line: &str) -> Option<ListFamily> {
    let family = list_marker(line)?;
    let rest = line.trim_start();
    let after_marker = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    let after_marker = &after_marker[1..];
    // one separator character, then at least one more character
    (after_marker.chars().count() >= 2).then_some(family)
}
