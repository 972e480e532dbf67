//! Shared configuration loader for the md-babel toolchain.
//!
//! `defaults/mdbabel.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md_babel::{ConversionOptions, DialectId};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdbabel.default.toml");

/// Name of the optional per-directory configuration file.
pub const USER_CONFIG_FILE: &str = "mdbabel.toml";

/// Top-level configuration consumed by md-babel applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdConfig {
    pub convert: ConvertConfig,
    pub preview: PreviewConfig,
}

/// Defaults for `mdbabel convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub from: DialectId,
    pub to: DialectId,
    pub wrap: bool,
    pub wrap_width: usize,
    pub tighten_lists: bool,
    pub setext_headings: bool,
}

impl From<&ConvertConfig> for ConversionOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConversionOptions {
            wrap_width: config.wrap.then_some(config.wrap_width),
            tighten_lists: config.tighten_lists,
            use_setext_headings: config.setext_headings,
        }
    }
}

impl From<ConvertConfig> for ConversionOptions {
    fn from(config: ConvertConfig) -> Self {
        ConversionOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub dialect: DialectId,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdConfig, ConfigError> {
    Loader::new().build()
}
