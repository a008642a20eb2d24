//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_update_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Caller input rejected before any remote call
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Record not found, or not part of the requested zone
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::RecordNotFound(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }

    /// Message suitable for an API client.
    ///
    /// Provider failures surface the registrar's own text when there is one.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Provider(e) => e
                .raw_message()
                .map_or_else(|| e.to_string(), ToString::to_string),
            other => other.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
