//! Error types for the folio engine.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating a portfolio.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested theme key is not in the registry.
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),

    /// Required identity data is structurally absent from the record.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// An unexpected internal fault during string assembly.
    #[error("Generation failed: {0}")]
    Generation(String),
}

impl GenerationError {
    /// Human-readable message for the failure envelope.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
