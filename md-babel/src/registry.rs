//! Dialect registry for dialect discovery and selection
//!
//! This module provides a centralized registry for all available dialects.
//! Dialects are registered once and retrieved by [`DialectId`].

use crate::dialect::{Dialect, DialectId};
use crate::dialects::{
    CommonMarkDialect, DiscordDialect, GfmDialect, KramdownDialect, MultiMarkdownDialect,
    ObsidianDialect, RedditDialect,
};
use crate::error::ConvertError;
use crate::rules::Direction;
use std::collections::HashMap;

/// Registry of Markdown dialects
///
/// # Examples
///
/// ```ignore
/// let registry = DialectRegistry::default();
/// let neutral = registry.apply_ingest(DialectId::Obsidian, "[[Page]]")?;
/// assert_eq!(neutral, "[Page](Page)");
/// ```
pub struct DialectRegistry {
    dialects: HashMap<DialectId, Box<dyn Dialect>>,
}

impl DialectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DialectRegistry {
            dialects: HashMap::new(),
        }
    }

    /// Register a dialect
    ///
    /// If a dialect with the same id already exists, it will be replaced.
    pub fn register<D: Dialect + 'static>(&mut self, dialect: D) {
        self.dialects.insert(dialect.id(), Box::new(dialect));
    }

    /// Get a dialect by id
    pub fn get(&self, id: DialectId) -> Result<&dyn Dialect, ConvertError> {
        self.dialects
            .get(&id)
            .map(|d| d.as_ref())
            .ok_or_else(|| ConvertError::UnknownDialect(id.to_string()))
    }

    /// Check if a dialect is registered
    pub fn has(&self, id: DialectId) -> bool {
        self.dialects.contains_key(&id)
    }

    /// List all registered dialect ids (sorted by presentation order)
    pub fn list_dialects(&self) -> Vec<DialectId> {
        let mut ids: Vec<_> = self.dialects.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Detect a dialect from a filename's extension
    ///
    /// Returns `None` when no registered dialect claims the extension.
    pub fn detect_from_filename(&self, filename: &str) -> Option<DialectId> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.list_dialects().into_iter().find(|id| {
            self.dialects[id]
                .file_extensions()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        })
    }

    /// Rewrite `text` from a dialect's syntax into the neutral form
    pub fn apply_ingest(&self, id: DialectId, text: &str) -> Result<String, ConvertError> {
        self.apply(id, Direction::Ingest, text)
    }

    /// Rewrite neutral `text` into a dialect's syntax
    pub fn apply_emit(&self, id: DialectId, text: &str) -> Result<String, ConvertError> {
        self.apply(id, Direction::Emit, text)
    }

    fn apply(
        &self,
        id: DialectId,
        direction: Direction,
        text: &str,
    ) -> Result<String, ConvertError> {
        let rules = self.get(id)?.rules(direction);
        log::debug!("{direction}: {} rule(s) for '{id}'", rules.len());
        Ok(rules.apply(text))
    }

    /// Create a registry with every built-in dialect
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(GfmDialect::default());
        registry.register(CommonMarkDialect::default());
        registry.register(KramdownDialect::default());
        registry.register(ObsidianDialect::default());
        registry.register(DiscordDialect::default());
        registry.register(RedditDialect::default());
        registry.register(MultiMarkdownDialect::default());

        registry
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
