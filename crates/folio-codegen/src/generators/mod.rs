//! Per-theme portfolio generators.

mod classic;
mod creative;
mod playful;

pub use classic::ClassicGenerator;
pub use creative::CreativeGenerator;
pub use playful::PlayfulGenerator;

use folio_core::errors::{GenerationError, Result};
use folio_core::record::{PortfolioRecord, Theme};

/// The output pair produced by one generator invocation.
#[derive(Debug, Clone)]
pub struct GeneratedPair {
    /// Complete single-file React component source.
    pub exported_source: String,
    /// Complete standalone markup document for the sandboxed preview.
    pub preview_document: String,
}

/// Common trait for theme generators.
///
/// A generator never fails for a syntactically valid record: optional
/// fields fall back to per-theme defaults and empty sections are omitted.
/// Only a structurally absent identity surfaces as an error.
pub trait ThemeGenerator {
    /// The theme this generator implements.
    fn theme(&self) -> Theme;

    /// Produce the output pair for one validated record.
    fn generate(&self, record: &PortfolioRecord) -> Result<GeneratedPair>;
}

/// The minimal identity check shared by every generator.
pub(crate) fn require_identity(record: &PortfolioRecord) -> Result<()> {
    if record.has_identity() {
        Ok(())
    } else {
        Err(GenerationError::MalformedRecord(
            "the record has no name to render".to_string(),
        ))
    }
}
