//! Discord and Reddit Markdown
//!
//! Both mark spoilers with `||text||`. Ingest hides the payload inside a
//! `<span data-spoiler>` marker, which the serializer and the emit rules turn back
//! into pipes.

use crate::dialect::{Dialect, DialectId};
use crate::dialects::markers;
use crate::rules::{Direction, Replacement, Rule, RuleSet};

fn spoiler_rules() -> (RuleSet, RuleSet) {
    let ingest = RuleSet::new(vec![Rule::new(
        "spoiler",
        Direction::Ingest,
        &markers::SPOILER_PIPES,
        Replacement::With(markers::wrap_spoiler),
    )]);
    let emit = RuleSet::new(vec![Rule::new(
        "spoiler",
        Direction::Emit,
        &markers::SPOILER_SPAN,
        Replacement::With(markers::unwrap_spoiler),
    )]);
    (ingest, emit)
}

/// Discord chat Markdown
pub struct DiscordDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for DiscordDialect {
    fn default() -> Self {
        let (ingest, emit) = spoiler_rules();
        DiscordDialect { ingest, emit }
    }
}

impl Dialect for DiscordDialect {
    fn id(&self) -> DialectId {
        DialectId::Discord
    }

    fn description(&self) -> &str {
        "||Spoiler|| spans"
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}

/// Reddit comment Markdown
pub struct RedditDialect {
    ingest: RuleSet,
    emit: RuleSet,
}

impl Default for RedditDialect {
    fn default() -> Self {
        let (ingest, emit) = spoiler_rules();
        RedditDialect { ingest, emit }
    }
}

impl Dialect for RedditDialect {
    fn id(&self) -> DialectId {
        DialectId::Reddit
    }

    fn description(&self) -> &str {
        "||Spoiler|| spans"
    }

    fn ingest_rules(&self) -> &RuleSet {
        &self.ingest
    }

    fn emit_rules(&self) -> &RuleSet {
        &self.emit
    }
}
