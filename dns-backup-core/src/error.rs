//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_backup_provider::ProviderError;

/// Three-way classification of run failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// DNS or storage service failure
    Provider,
    /// Missing or invalid invocation input
    Configuration,
    /// Anything else
    Unexpected,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Required input missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A stored document does not have the expected shape
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Catch-all for failures outside the other categories
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Maps the error onto the provider / configuration / unexpected taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Provider(_) => ErrorKind::Provider,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvalidDocument(_) | Self::Serialization(_) | Self::Unexpected(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::InvalidDocument(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::Serialization(_) | Self::Unexpected(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
