//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur during a conversion
///
/// Rule non-matches are not errors: a rule that finds nothing leaves the text alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Dialect identifier not in the supported vocabulary
    #[error("Unknown dialect '{0}'")]
    UnknownDialect(String),
    /// Wrap width outside the accepted range (0 disables reflow)
    #[error("Wrap width {width} is out of range (expected 0 or {min}..={max})")]
    InvalidWrapWidth { width: usize, min: usize, max: usize },
    /// The Markdown renderer failed
    #[error("Render error: {0}")]
    Render(String),
    /// The HTML serializer failed
    #[error("Serialization error: {0}")]
    Serialize(String),
}
