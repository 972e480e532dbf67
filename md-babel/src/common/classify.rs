//! Line classification
//!
//! Cheap, per-line predicates deciding whether a Markdown line is structure (heading,
//! list item, table row, thematic break, block quote, fence) or plain paragraph text.
//! They look at one line at a time; setext headings need the following line as well and
//! go through [`classify_with_next`].

/// What a single line of Markdown is, structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    TableRow,
    ThematicBreak,
    BlockquoteStart,
    FenceDelimiter,
    Plain,
}

impl LineKind {
    pub fn is_structural(self) -> bool {
        self != LineKind::Plain
    }
}

/// Classify a line on its own. First matching rule wins.
///
/// Blank lines are paragraph separators and callers should test [`is_blank`] first;
/// this function does not special-case them.
pub fn classify(line: &str) -> LineKind {
    if is_fence_delimiter(line) {
        LineKind::FenceDelimiter
    } else if is_atx_heading(line) {
        LineKind::Heading
    } else if is_list_item(line) {
        LineKind::ListItem
    } else if is_table_row(line) {
        LineKind::TableRow
    } else if is_thematic_break(line) {
        LineKind::ThematicBreak
    } else if is_blockquote_start(line) {
        LineKind::BlockquoteStart
    } else {
        LineKind::Plain
    }
}

/// Classify a line given the line after it, so setext headings are recognised.
pub fn classify_with_next(line: &str, next: Option<&str>) -> LineKind {
    match classify(line) {
        LineKind::Plain if !is_blank(line) && next.is_some_and(is_setext_underline) => {
            LineKind::Heading
        }
        kind => kind,
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Three or more backticks or tildes, optionally followed by an info string.
pub fn is_fence_delimiter(line: &str) -> bool {
    fence_char(line).is_some()
}

/// The fence character (`` ` `` or `~`) if the line is a fence delimiter.
pub fn fence_char(line: &str) -> Option<char> {
    fence_run(line).map(|(c, _)| c)
}

/// The fence character and the length of its leading run, if the line is a fence delimiter.
pub fn fence_run(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim();
    ['`', '~'].into_iter().find_map(|c| {
        let run = trimmed.chars().take_while(|&x| x == c).count();
        (run >= 3).then_some((c, run))
    })
}

/// Whether `line` closes a fence opened by `run` repetitions of `fence`.
///
/// The closing run uses the same character, is at least as long as the opening one and
/// carries no info string.
pub fn closes_fence(line: &str, fence: char, run: usize) -> bool {
    match fence_run(line) {
        Some((c, len)) if c == fence && len >= run => {
            line.trim().trim_start_matches(c).trim().is_empty()
        }
        _ => false,
    }
}

/// Up to three spaces, one to six `#`, then whitespace.
pub fn is_atx_heading(line: &str) -> bool {
    let indent = line.chars().take_while(|&c| c == ' ').count();
    if indent > 3 {
        return false;
    }
    let rest = &line[indent..];
    let hashes = rest.chars().take_while(|&c| c == '#').count();
    (1..=6).contains(&hashes) && rest[hashes..].starts_with(char::is_whitespace)
}

/// Bullet (`-`, `*`, `+`) or ordered (`12.`) marker followed by whitespace.
pub fn is_list_item(line: &str) -> bool {
    list_marker(line).is_some()
}

/// Family of a list marker starting the line, if any.
pub fn list_marker(line: &str) -> Option<ListFamily> {
    let rest = line.trim_start();
    let (family, after) = if let Some(after) = rest.strip_prefix(['-', '*', '+']) {
        (ListFamily::Bullet, after)
    } else {
        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        (ListFamily::Ordered, rest[digits..].strip_prefix('.')?)
    };
    after.starts_with(char::is_whitespace).then_some(family)
}

/// Marker family, for telling bullet runs from ordered runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFamily {
    Bullet,
    Ordered,
}

/// A pipe row, or a delimiter row made of `-`, `|`, `:` and spaces.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('|') {
        return true;
    }
    trimmed.chars().count() >= 3
        && trimmed.contains('-')
        && trimmed.chars().all(|c| matches!(c, '-' | '|' | ':' | ' '))
}

/// Three or more of the same `-`, `*` or `_` and nothing else.
pub fn is_thematic_break(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_')
        && trimmed.chars().count() >= 3
        && trimmed.chars().all(|c| c == first)
}

pub fn is_blockquote_start(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

/// Three or more `=` or three or more `-` and nothing else.
pub fn is_setext_underline(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() >= 3
        && (trimmed.chars().all(|c| c == '=') || trimmed.chars().all(|c| c == '-'))
}
