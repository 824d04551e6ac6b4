//! Exported page source assembly.
//!
//! The exported artifact is a single-file React component. The record
//! travels inside it as an inert, double-quoted JSON string literal built
//! with [`escape::script_string`]; at load time the component parses the
//! literal back into data, falling back to a clearly-marked error record
//! when parsing fails or the identity field is missing. This module is the
//! only place exported source is constructed; themes contribute a JSX
//! component body and nothing else.

use folio_core::escape;
use folio_core::record::{PortfolioRecord, Theme};

use crate::plan::{FALLBACK_ACCENT, FALLBACK_BACKGROUND, FALLBACK_PRIMARY};

/// The record serialized into a double-quoted JS string literal.
///
/// A double-quoted literal keeps `${...}` sequences inert, unlike a
/// template literal; the escaper's backtick rewrite is an identity escape
/// in this context.
pub fn embedded_record_literal(record: &PortfolioRecord) -> String {
    let json = serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string());
    format!("\"{}\"", escape::script_string(Some(&json)))
}

/// The fallback record rendered when the embedded data cannot be loaded.
///
/// Built as a real [`PortfolioRecord`] so it always has the same shape as
/// normal data; red-on-pale-red colors and the explicit headline mark it as
/// an error state rather than passing it off as content.
pub fn error_record(theme: Theme) -> PortfolioRecord {
    PortfolioRecord {
        your_name: "Portfolio unavailable".to_string(),
        hero_title: Some("This export could not load its data".to_string()),
        hero_tagline: Some(format!(
            "The embedded record failed to parse. Regenerate the {} export to replace this error view.",
            theme.display_name(),
        )),
        primary_color: Some("#B91C1C".to_string()),
        background_color: Some("#FEF2F2".to_string()),
        accent_color: Some("#B91C1C".to_string()),
        theme,
        ..Default::default()
    }
}

/// JS runtime helpers shared by every theme's component body. Kept in one
/// block so the exported palette derivation cannot drift from the preview's.
const RUNTIME_HELPERS: &str = r#"function resolveColor(value, fallback) {
  return typeof value === 'string' && /^#[0-9a-fA-F]{6}$/.test(value) ? value : fallback;
}

function contrastColor(hex) {
  if (typeof hex !== 'string') return '#FFFFFF';
  let digits = hex.startsWith('#') ? hex.slice(1) : null;
  if (digits === null) return '#FFFFFF';
  if (digits.length === 3) digits = digits.split('').map((c) => c + c).join('');
  if (!/^[0-9a-fA-F]{6}$/.test(digits)) return '#FFFFFF';
  const r = parseInt(digits.slice(0, 2), 16);
  const g = parseInt(digits.slice(2, 4), 16);
  const b = parseInt(digits.slice(4, 6), 16);
  return 0.299 * r + 0.587 * g + 0.114 * b >= 128 ? '#000000' : '#FFFFFF';
}

function darken(hex, t) {
  const digits = hex.slice(1);
  const channel = (i) => Math.round(parseInt(digits.slice(i, i + 2), 16) * (1 - t));
  const pad = (v) => v.toString(16).padStart(2, '0');
  return '#' + pad(channel(0)) + pad(channel(2)) + pad(channel(4));
}

function derivePalette(record) {
  const primary = resolveColor(record.primaryColor, FALLBACK_COLORS.primary);
  const background = resolveColor(record.backgroundColor, FALLBACK_COLORS.background);
  const accent = resolveColor(record.accentColor, FALLBACK_COLORS.accent);
  return {
    primary,
    background,
    accent,
    foreground: contrastColor(background),
    onPrimary: contrastColor(primary),
    onAccent: contrastColor(accent),
    primaryDark: darken(primary, 0.25),
  };
}

function skillTags(record) {
  return (record.skills || '')
    .split(',')
    .map((tag) => tag.trim())
    .filter(Boolean);
}

function renderableProjects(record) {
  return (record.projects || []).filter(
    (project) => project && typeof project.name === 'string' && project.name.trim() !== ''
  );
}

function renderableAcademicEntries(record) {
  return (record.academicEntries || []).filter(
    (entry) => entry && typeof entry.qualification === 'string' && entry.qualification.trim() !== ''
  );
}

function hasText(value) {
  return typeof value === 'string' && value.trim() !== '';
}

function withBreaks(text) {
  const lines = String(text == null ? '' : text).split('\n');
  return lines.flatMap((line, index) =>
    index === 0 ? [line] : [<br key={'br-' + index} />, line]
  );
}

function sectionVisibility(record) {
  const projects = renderableProjects(record);
  const academicEntries = renderableAcademicEntries(record);
  const tags = skillTags(record);
  const about = Boolean(record.showAboutSection) && hasText(record.aboutMe);
  const contact =
    Boolean(record.showContactSection) &&
    (hasText(record.contactEmail) ||
      hasText(record.linkedinUrl) ||
      hasText(record.githubUrl) ||
      hasText(record.instagramUrl));
  return {
    about,
    funFact: about && Boolean(record.showFunFact) && hasText(record.funFact),
    academic: Boolean(record.showAcademicSection) && academicEntries.length > 0,
    projects: Boolean(record.showProjectsSection) && projects.length > 0,
    experience: Boolean(record.showExperienceSection) && projects.length > 0,
    skills: Boolean(record.showSkillsSection) && tags.length > 0,
    contact,
    resume: contact && Boolean(record.showResumeLink) && hasText(record.resumeUrl),
  };
}"#;

/// Assemble one complete exported component file: header comment, import,
/// embedded record, error fallback, runtime helpers, then the theme's
/// component body.
pub fn assemble(
    theme: Theme,
    record: &PortfolioRecord,
    component_name: &str,
    component_body: &str,
) -> String {
    let error_json = serde_json::to_string_pretty(&error_record(theme))
        .unwrap_or_else(|_| "{}".to_string());

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "// {}.jsx: generated portfolio export ({} theme).",
        component_name,
        theme.display_name(),
    ));
    lines.push(
        "// Self-contained: drop this file into any React project and render the default export."
            .to_string(),
    );
    lines.push("import React from 'react';".to_string());
    lines.push(String::new());
    lines.push(format!(
        "const EMBEDDED_RECORD = {};",
        embedded_record_literal(record)
    ));
    lines.push(String::new());
    lines.push(format!("const ERROR_RECORD = {};", error_json));
    lines.push(String::new());
    lines.push("function loadRecord() {".to_string());
    lines.push("  try {".to_string());
    lines.push("    const parsed = JSON.parse(EMBEDDED_RECORD);".to_string());
    lines.push(
        "    if (!parsed || typeof parsed.yourName !== 'string' || parsed.yourName.trim() === '') {"
            .to_string(),
    );
    lines.push("      return ERROR_RECORD;".to_string());
    lines.push("    }".to_string());
    lines.push("    return parsed;".to_string());
    lines.push("  } catch (_err) {".to_string());
    lines.push("    return ERROR_RECORD;".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!(
        "const FALLBACK_COLORS = {{ primary: '{}', background: '{}', accent: '{}' }};",
        FALLBACK_PRIMARY, FALLBACK_BACKGROUND, FALLBACK_ACCENT,
    ));
    lines.push(String::new());
    lines.push(RUNTIME_HELPERS.to_string());
    lines.push(String::new());
    lines.push(component_body.to_string());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_literal_is_inert() {
        let record = PortfolioRecord {
            your_name: "Ada `${alert(1)}` \"Lovelace\"\nEngineer".to_string(),
            ..Default::default()
        };
        let literal = embedded_record_literal(&record);
        assert!(literal.starts_with('"') && literal.ends_with('"'));
        // Backticks and quotes are escaped, newlines become two characters.
        assert!(literal.contains("\\`"));
        assert!(!literal.contains('\n'));
    }

    #[test]
    fn test_error_record_has_record_shape() {
        let json = serde_json::to_string(&error_record(Theme::Creative)).unwrap();
        let round_tripped: PortfolioRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped.your_name, "Portfolio unavailable");
        assert_eq!(round_tripped.theme, Theme::Creative);
        assert!(round_tripped
            .hero_tagline
            .unwrap()
            .contains("Creative export"));
        assert!(!round_tripped.show_about_section);
    }

    #[test]
    fn test_assemble_wraps_component_body() {
        let record = PortfolioRecord {
            your_name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        let source = assemble(
            Theme::Classic,
            &record,
            "AdaLovelacePortfolio",
            "export default function AdaLovelacePortfolio() { return null; }",
        );
        assert!(source.starts_with("// AdaLovelacePortfolio.jsx"));
        assert!(source.contains("import React from 'react';"));
        assert!(source.contains("const EMBEDDED_RECORD = \""));
        assert!(source.contains("function loadRecord()"));
        assert!(source.contains("export default function AdaLovelacePortfolio()"));
    }
}
