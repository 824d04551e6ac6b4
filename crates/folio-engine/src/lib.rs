//! Engine facade and theme registry for the folio portfolio engine.
//!
//! The facade is the single entry point for the transport collaborator:
//! it resolves a theme key against the closed [`Theme`] set, dispatches to
//! the matching generator, and translates every internal fault into the
//! typed [`GenerationError`]; no raw fault crosses this boundary. The
//! engine itself is a pure, synchronous, stateless computation: one call,
//! one record, one output pair, safely callable from any thread.
//!
//! # Example
//!
//! ```
//! use folio_core::PortfolioRecord;
//!
//! let record = PortfolioRecord {
//!     your_name: "Ada Lovelace".to_string(),
//!     ..Default::default()
//! };
//! let pair = folio_engine::generate("classic", &record).unwrap();
//! assert!(pair.preview_document.contains("Ada Lovelace"));
//! ```

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use folio_codegen::{
    ClassicGenerator, CreativeGenerator, GeneratedPair, PlayfulGenerator, ThemeGenerator,
};
use folio_core::errors::{GenerationError, Result};
use folio_core::record::{PortfolioRecord, Theme};

/// The theme keys exposed to the selection UI, in stable registry order.
pub fn list_themes() -> Vec<&'static str> {
    Theme::ALL.iter().map(|theme| theme.key()).collect()
}

/// Generate the output pair for a theme key and a validated record.
///
/// An unrecognized key is an [`GenerationError::InvalidTheme`]; everything
/// a generator reports passes through typed.
pub fn generate(theme_key: &str, record: &PortfolioRecord) -> Result<GeneratedPair> {
    let theme = Theme::from_key(theme_key)
        .ok_or_else(|| GenerationError::InvalidTheme(theme_key.to_string()))?;
    generate_for_theme(theme, record)
}

/// Generate for an already-resolved theme.
///
/// Generators are written never to panic, but this boundary still catches
/// an unexpected fault and reports it as [`GenerationError::Generation`]
/// rather than letting it propagate raw.
pub fn generate_for_theme(theme: Theme, record: &PortfolioRecord) -> Result<GeneratedPair> {
    match catch_unwind(AssertUnwindSafe(|| dispatch(theme, record))) {
        Ok(result) => result,
        Err(fault) => Err(GenerationError::Generation(panic_message(fault))),
    }
}

/// Exhaustive dispatch over the closed theme set; adding or removing a
/// theme is a compile-checked change.
fn dispatch(theme: Theme, record: &PortfolioRecord) -> Result<GeneratedPair> {
    match theme {
        Theme::Classic => ClassicGenerator::new().generate(record),
        Theme::Creative => CreativeGenerator::new().generate(record),
        Theme::Playful => PlayfulGenerator::new().generate(record),
    }
}

fn panic_message(fault: Box<dyn Any + Send>) -> String {
    if let Some(message) = fault.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = fault.downcast_ref::<String>() {
        message.clone()
    } else {
        "internal generator fault".to_string()
    }
}

/// The response envelope handed back to the transport collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn from_result(result: Result<GeneratedPair>) -> Self {
        match result {
            Ok(pair) => GenerateResponse {
                success: true,
                exported_source: Some(pair.exported_source),
                preview_document: Some(pair.preview_document),
                error: None,
            },
            Err(error) => GenerateResponse {
                success: false,
                exported_source: None,
                preview_document: None,
                error: Some(error.message()),
            },
        }
    }
}

/// Convenience wrapper: generate and shape the result into the envelope.
pub fn respond(theme_key: &str, record: &PortfolioRecord) -> GenerateResponse {
    GenerateResponse::from_result(generate(theme_key, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::record::ProjectEntry;

    fn ada() -> PortfolioRecord {
        PortfolioRecord {
            your_name: "Ada Lovelace".to_string(),
            hero_title: Some("Engineer".to_string()),
            theme: Theme::Classic,
            primary_color: Some("#112233".to_string()),
            background_color: Some("#FFFFFF".to_string()),
            accent_color: Some("#AA0000".to_string()),
            contact_email: "a@b.com".to_string(),
            show_contact_section: true,
            projects: vec![],
            academic_entries: vec![],
            ..Default::default()
        }
    }

    fn project(index: usize) -> ProjectEntry {
        ProjectEntry {
            name: format!("Project {index}"),
            description: "Did something useful.".to_string(),
            technologies: "Rust, WASM".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_themes_is_stable() {
        assert_eq!(list_themes(), vec!["classic", "creative", "playful"]);
    }

    #[test]
    fn test_end_to_end_classic_scenario() {
        let pair = generate("classic", &ada()).unwrap();
        assert!(pair.preview_document.contains("Ada Lovelace"));
        assert!(pair.preview_document.contains("mailto:a@b.com"));
        // foreground = contrast of the white background.
        assert!(pair.preview_document.contains("color: #000000"));
        assert!(pair.exported_source.contains("AdaLovelacePortfolio"));
    }

    #[test]
    fn test_unrecognized_theme_is_typed_error() {
        let err = generate("nonexistent-theme", &ada()).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidTheme(_)));
        assert_eq!(err.message(), "Unknown theme: nonexistent-theme");
    }

    #[test]
    fn test_zero_and_six_projects_generate_for_every_theme() {
        for key in list_themes() {
            let mut empty = ada();
            empty.show_projects_section = true;
            empty.projects.clear();
            assert!(generate(key, &empty).is_ok(), "empty projects, theme {key}");

            let mut full = ada();
            full.show_projects_section = true;
            full.show_experience_section = true;
            full.projects = (0..6).map(project).collect();
            assert!(generate(key, &full).is_ok(), "six projects, theme {key}");
        }
    }

    #[test]
    fn test_empty_flagged_projects_not_rendered_for_every_theme() {
        for key in list_themes() {
            let mut record = ada();
            record.show_projects_section = true;
            record.show_experience_section = true;
            record.projects.clear();
            let pair = generate(key, &record).unwrap();
            assert!(
                !pair.preview_document.contains("href=\"#projects\""),
                "theme {key} linked an empty projects section"
            );
            assert!(
                !pair.preview_document.contains("Work History"),
                "theme {key} rendered empty work history"
            );
        }
    }

    #[test]
    fn test_malformed_record_surfaces_through_envelope() {
        let mut record = ada();
        record.your_name = String::new();
        let response = respond("classic", &record);
        assert!(!response.success);
        assert!(response.error.unwrap().starts_with("Malformed record"));
        assert!(response.preview_document.is_none());
    }

    #[test]
    fn test_success_envelope_shape() {
        let response = respond("creative", &ada());
        assert!(response.success);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("exportedSource").is_some());
        assert!(json.get("previewDocument").is_some());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_generators_never_mutate_the_record() {
        let record = ada();
        let before = serde_json::to_string(&record).unwrap();
        for key in list_themes() {
            let _ = generate(key, &record).unwrap();
        }
        assert_eq!(serde_json::to_string(&record).unwrap(), before);
    }
}
