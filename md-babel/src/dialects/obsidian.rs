//! Obsidian Markdown
//!
//! Ingest rewrites wiki-links, embeds, callout headers and `==highlights==` into plain
//! Markdown. Emit goes the other way for links only, and only for links that look like
//! they point at another note in the vault.
//!
//! Note names may contain spaces, which a bare link destination cannot. Ingest wraps such
//! destinations in `<...>`; emit accepts them wrapped or percent-encoded, since renderers
//! write spaces in an `href` as `%20`.
//!
//! # Heuristic
//!
//! [`looks_internal`] cannot tell a note name from a bare host name: `[x](example)` is
//! turned into `[[example|x]]` whether or not `example` is a note. The rule is kept
//! exactly as it is so that output stays predictable.

use crate::dialect::{Dialect, DialectId};
use crate::dialects::markers;
use crate::rules::{Direction, Replacement, Rule, RuleSet};
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};
use std::borrow::Cow;

static EMBED: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[\[([^\]]+?)\]\]").unwrap());
static ALIASED_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^|\]]+?)\|([^\]]+?)\]\]").unwrap());
static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+?)\]\]").unwrap());
static CALLOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^>[ \t]*\[!([A-Za-z0-9_-]+)\][ \t]*(.*)$").unwrap());
static HIGHLIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"==([^=\n]+)==").unwrap());

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+?)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+?)\]\(([^)]+?)\)").unwrap());

static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+://").unwrap());
static FILE_EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.[a-z0-9]{2,5}$").unwrap());

/// Whether an href looks like a note name rather than a URL or file path.
///
/// True when the trimmed href has no `scheme://` prefix, no `/`, and no trailing
/// `.ext` of two to five alphanumerics.
pub fn looks_internal(href: &str) -> bool {
    let href = href.trim();
    !SCHEME.is_match(href) && !href.contains('/') && !FILE_EXTENSION.is_match(href)
}

/// A note name as a link destination: wrapped in `<...>` when it contains whitespace.
pub fn link_destination(target: &str) -> Cow<'_, str> {
    if target.contains(char::is_whitespace) {
        Cow::Owned(format!("<{target}>"))
    } else {
        Cow::Borrowed(target)
    }
}

/// Undo [`link_destination`] and any percent-encoding added by the renderer.
fn note_target(href: &str) -> String {
    let href = href.trim();
    let href = href
        .strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(href);
    match percent_decode_str(href).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => href.to_string(),
    }
}

fn embed(caps: &Captures) -> String {
    format!("![]({})", link_destination(&caps[1]))
}

fn aliased_link(caps: &Captures) -> String {
    format!("[{}]({})", &caps[2], link_destination(&caps[1]))
}

fn wiki_link(caps: &Captures) -> String {
    format!("[{}]({})", &caps[1], link_destination(&caps[1]))
}

fn callout(caps: &Captures) -> String {
    let kind = &caps[1];
    let mut chars = kind.chars();
    let label = match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    };
    let title = caps[2].trim();
    if title.is_empty() {
        format!("> **{label}:**")
    } else {
        format!("> **{label}:** {title}")
    }
}

fn embed_back(caps: &Captures) -> String {
    let alt = caps[1].trim();
    let href = note_target(&caps[2]);
    let href = href.as_str();
    if !looks_internal(href) {
        return caps[0].to_string();
    }
    if alt.is_empty() || alt == href {
        format!("![[{href}]]")
    } else {
        format!("![[{href}|{alt}]]")
    }
}

fn link_back(caps: &Captures) -> String {
    let text = caps[1].trim();
    let href = note_target(&caps[2]);
    let href = href.as_str();
    // `\[a\](b)` is escaped text, not a link
    if caps[1].ends_with('\\') || !looks_internal(href) {
        return caps[0].to_string();
    }
    if text == href {
        format!("[[{href}]]")
    } else {
        format!("[[{href}|{text}]]")
    }
}

/// Obsidian dialect: wiki-links, embeds, callouts, highlights
pub struct ObsidianDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for ObsidianDialect {
    fn default() -> Self {
        use Direction::{Emit, Ingest};

        // Embeds before aliased links before bare links: each is a super-pattern of the next.
        let ingest = RuleSet::new(vec![
            Rule::new("embed", Ingest, &EMBED, Replacement::With(embed)),
            Rule::new(
                "aliased-link",
                Ingest,
                &ALIASED_LINK,
                Replacement::With(aliased_link),
            ),
            Rule::new("wiki-link", Ingest, &WIKI_LINK, Replacement::With(wiki_link)),
            Rule::new("callout", Ingest, &CALLOUT, Replacement::With(callout)),
            Rule::new("highlight", Ingest, &HIGHLIGHT, Replacement::Template("**${1}**")),
        ]);

        // Images first so the link rule never sees the `[alt](src)` tail of an image.
        let emit = RuleSet::new(vec![
            Rule::new("embed", Emit, &IMAGE, Replacement::With(embed_back)),
            Rule::new("wiki-link", Emit, &LINK, Replacement::With(link_back)),
            Rule::new(
                "spoiler",
                Emit,
                &markers::SPOILER_SPAN,
                Replacement::With(markers::unwrap_spoiler),
            ),
        ]);

        ObsidianDialect { ingest, emit }
    }
}

impl Dialect for ObsidianDialect {
    fn id(&self) -> DialectId {
        DialectId::Obsidian
    }

    fn description(&self) -> &str {
        "Wiki-links, embeds, callouts and ==highlights=="
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}
