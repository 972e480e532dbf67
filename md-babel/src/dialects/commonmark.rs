//! CommonMark and GitHub Flavored Markdown
//!
//! Neither has syntax of its own beyond the neutral form. CommonMark output additionally
//! drops pass-through markers left behind by other dialects, since it has nowhere to put
//! attribute lists or metadata.

use crate::dialect::{Dialect, DialectId};
use crate::dialects::markers;
use crate::rules::{Direction, Replacement, Rule, RuleSet};

pub struct CommonMarkDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for CommonMarkDialect {
    fn default() -> Self {
        let emit = RuleSet::new(vec![
            Rule::new(
                "strip-attribute-lists",
                Direction::Emit,
                &markers::KRAMDOWN_ATTRLIST_MARKER_LINE,
                Replacement::Literal(""),
            ),
            Rule::new(
                "strip-metadata",
                Direction::Emit,
                &markers::MMD_META_MARKER_BLOCK,
                Replacement::Literal(""),
            ),
        ]);
        CommonMarkDialect {
            ingest: RuleSet::empty(),
            emit,
        }
    }
}

impl Dialect for CommonMarkDialect {
    fn id(&self) -> DialectId {
        DialectId::CommonMark
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}

#[derive(Default)]
pub struct GfmDialect {
    rules: RuleSet,
}

impl Dialect for GfmDialect {
    fn id(&self) -> DialectId {
        DialectId::Gfm
    }

    fn description(&self) -> &str {
        "Tables, task lists, strikethrough and autolinks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.rules
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.rules
    }
}
