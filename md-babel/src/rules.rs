//! Text-rewrite rules and ordered rule sets
//!
//! A [`Rule`] pairs a pattern with a replacement and a direction. A [`RuleSet`] is an
//! ordered list of rules for one dialect and one direction; applying it runs every rule
//! over the whole document in declared order, each rule seeing the output of the one
//! before. Order matters: Obsidian embeds (`![[x]]`) must be rewritten before plain
//! wiki-links (`[[x]]`) because the former contain the latter.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;

/// Which side of the neutral form a rule works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Source-dialect syntax → neutral syntax
    Ingest,
    /// Neutral syntax → target-dialect syntax
    Emit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ingest => write!(f, "ingest"),
            Direction::Emit => write!(f, "emit"),
        }
    }
}

/// How a match is turned into replacement text
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A `regex` replacement template (`${1}` style group references)
    Template(&'static str),
    /// Fixed text, inserted as-is
    Literal(&'static str),
    /// A pure function of the captures
    With(fn(&Captures) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacement::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Replacement::With(_) => f.write_str("With(..)"),
        }
    }
}

/// A single rewrite rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    direction: Direction,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Build a rule from an already-compiled regular expression
    pub fn new(
        name: &'static str,
        direction: Direction,
        pattern: &Regex,
        replacement: Replacement,
    ) -> Self {
        Rule {
            name,
            direction,
            pattern: pattern.clone(),
            replacement,
        }
    }

    /// Build a rule that matches a literal string
    ///
    /// `$` in the replacement is taken literally as well.
    pub fn literal(
        name: &'static str,
        direction: Direction,
        needle: &str,
        replacement: &'static str,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&regex::escape(needle))?;
        Ok(Rule {
            name,
            direction,
            pattern,
            replacement: Replacement::Literal(replacement),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Replace every non-overlapping match. Borrowed output means nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Literal(fixed) => self.pattern.replace_all(text, regex::NoExpand(fixed)),
            Replacement::With(f) => self.pattern.replace_all(text, |caps: &Captures| f(caps)),
        }
    }
}

/// Ordered rules for one (dialect, direction) pair
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Rule names in application order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Run every rule in order, feeding each rule's output into the next
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule.apply(&current) {
                log::trace!("rule '{}' ({}) rewrote text", rule.name, rule.direction);
                current = rewritten;
            }
        }
        current
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
