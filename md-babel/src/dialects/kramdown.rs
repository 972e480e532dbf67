//! Kramdown
//!
//! Standalone inline attribute list lines (`{: .class #id}`) mean nothing to a generic
//! parser and would come back escaped, so they travel as HTML comments.

use crate::dialect::{Dialect, DialectId};
use crate::dialects::markers;
use crate::rules::{Direction, Replacement, Rule, RuleSet};

pub struct KramdownDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for KramdownDialect {
    fn default() -> Self {
        let ingest = RuleSet::new(vec![Rule::new(
            "attribute-list",
            Direction::Ingest,
            &markers::KRAMDOWN_ATTRLIST_LINE,
            Replacement::With(markers::wrap_attrlist),
        )]);
        // A block attribute list belongs to the block right above it, so the blank line
        // the serializer puts between blocks has to go before unwrapping.
        let emit = RuleSet::new(vec![
            Rule::new(
                "attach-attribute-list",
                Direction::Emit,
                &markers::KRAMDOWN_ATTRLIST_DETACHED,
                Replacement::Template("\n${1}"),
            ),
            Rule::new(
                "attribute-list",
                Direction::Emit,
                &markers::KRAMDOWN_ATTRLIST_MARKER,
                Replacement::Template("${1}"),
            ),
        ]);
        KramdownDialect { ingest, emit }
    }
}

impl Dialect for KramdownDialect {
    fn id(&self) -> DialectId {
        DialectId::Kramdown
    }

    fn description(&self) -> &str {
        "Inline attribute lists"
    }

    fn file_extensions(&self) -> &[&str] {
        &["kramdown", "kd"]
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}
