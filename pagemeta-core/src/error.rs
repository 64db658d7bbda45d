//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use pagemeta_schema::VocabularyError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Image rendition error from the host image backend
    #[error("Image error: {0}")]
    ImageError(String),

    /// Vocabulary parse error (converted from the schema library)
    #[error("{0}")]
    Vocabulary(#[from] VocabularyError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::Vocabulary(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
