//! Dialect trait definition
//!
//! This module defines the closed set of dialect identifiers and the [`Dialect`] trait
//! that every dialect implementation provides. A dialect is nothing more than a name
//! and two ordered rule sets: one rewriting its own syntax into the neutral form, one
//! rewriting the neutral form back into its syntax.

use crate::error::ConvertError;
use crate::rules::{Direction, RuleSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed vocabulary of supported dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectId {
    Gfm,
    CommonMark,
    Kramdown,
    Obsidian,
    Discord,
    Reddit,
    MultiMarkdown,
}

impl DialectId {
    /// Every dialect, in presentation order
    pub const ALL: [DialectId; 7] = [
        DialectId::Gfm,
        DialectId::CommonMark,
        DialectId::Kramdown,
        DialectId::Obsidian,
        DialectId::Discord,
        DialectId::Reddit,
        DialectId::MultiMarkdown,
    ];

    /// The textual id (`gfm`, `commonmark`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectId::Gfm => "gfm",
            DialectId::CommonMark => "commonmark",
            DialectId::Kramdown => "kramdown",
            DialectId::Obsidian => "obsidian",
            DialectId::Discord => "discord",
            DialectId::Reddit => "reddit",
            DialectId::MultiMarkdown => "multimarkdown",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DialectId::Gfm => "GitHub Flavored Markdown (GFM)",
            DialectId::CommonMark => "CommonMark",
            DialectId::Kramdown => "Kramdown",
            DialectId::Obsidian => "Obsidian Markdown",
            DialectId::Discord => "Discord Markdown",
            DialectId::Reddit => "Reddit Markdown",
            DialectId::MultiMarkdown => "MultiMarkdown",
        }
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DialectId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvertError::UnknownDialect(s.to_string()))
    }
}

/// Trait for Markdown dialects
///
/// Implementors supply the rule sets that move text between their own syntax and the
/// neutral form. Dialects with no extension syntax simply keep the default empty sets.
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Dialect for Plain {
///     fn id(&self) -> DialectId {
///         DialectId::CommonMark
///     }
/// }
/// ```
pub trait Dialect: Send + Sync {
    /// The identifier this implementation answers to
    fn id(&self) -> DialectId;

    /// Display name, defaults to the id's display name
    fn name(&self) -> &str {
        self.id().display_name()
    }

    /// Optional description of the dialect's extension syntax
    fn description(&self) -> &str {
        ""
    }

    /// File extensions (without the leading dot) that imply this dialect
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Rules rewriting this dialect's syntax into the neutral form
    fn ingest_rules(&self) -> &RuleSet;

    /// Rules rewriting the neutral form into this dialect's syntax
    fn emit_rules(&self) -> &RuleSet;

    /// The rule set for one direction
    fn rules(&self, direction: Direction) -> &RuleSet {
        match direction {
            Direction::Ingest => self.ingest_rules(),
            Direction::Emit => self.emit_rules(),
        }
    }
}
