//! MultiMarkdown
//!
//! A leading block of `Key: value` lines is document metadata. Left alone it would be
//! parsed as a paragraph and its line breaks lost, so it travels as one HTML comment.

use crate::dialect::{Dialect, DialectId};
use crate::dialects::markers;
use crate::rules::{Direction, Replacement, Rule, RuleSet};

pub struct MultiMarkdownDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for MultiMarkdownDialect {
    fn default() -> Self {
        let ingest = RuleSet::new(vec![Rule::new(
            "metadata",
            Direction::Ingest,
            &markers::MMD_META_BLOCK,
            Replacement::With(markers::wrap_meta),
        )]);
        let emit = RuleSet::new(vec![Rule::new(
            "metadata",
            Direction::Emit,
            &markers::MMD_META_MARKER,
            Replacement::Template("${1}"),
        )]);
        MultiMarkdownDialect { ingest, emit }
    }
}

impl Dialect for MultiMarkdownDialect {
    fn id(&self) -> DialectId {
        DialectId::MultiMarkdown
    }

    fn description(&self) -> &str {
        "Leading metadata block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mmd"]
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}
