//! Theme generators for the folio portfolio engine.
//!
//! Each generator consumes one validated [`folio_core::PortfolioRecord`]
//! and produces a
//! [`GeneratedPair`]: a standalone preview document for the sandboxed
//! preview surface, and a self-contained React component file as exported
//! page source. The shared skeleton (section plan, palette derivation,
//! preview shell, exported-source assembly) lives here; the three theme
//! modules supply only layout and voice.
//!
//! # Example
//!
//! ```
//! use folio_codegen::{ClassicGenerator, ThemeGenerator};
//! use folio_core::PortfolioRecord;
//!
//! let record = PortfolioRecord {
//!     your_name: "Ada Lovelace".to_string(),
//!     ..Default::default()
//! };
//! let pair = ClassicGenerator::new().generate(&record).unwrap();
//! assert!(pair.preview_document.starts_with("<!DOCTYPE html>"));
//! ```

pub mod export;
pub mod generators;
pub mod page;
pub mod plan;

pub use generators::{
    ClassicGenerator, CreativeGenerator, GeneratedPair, PlayfulGenerator, ThemeGenerator,
};
pub use plan::{component_ident, Palette, SectionPlan};
