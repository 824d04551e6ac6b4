//! Derived rendering state shared by every theme generator.
//!
//! Both the section plan and the palette are computed once per generation
//! and passed read-only into the theme's fragment builders, so visibility
//! gating and color fallbacks cannot drift between the preview document and
//! the navigation, or between themes.

use convert_case::{Case, Casing};
use folio_core::color::{contrast_color, darken, Rgb};
use folio_core::record::{AcademicEntry, PortfolioRecord, ProjectEntry};

/// Fallback brand color applied when the record's primary color is absent
/// or malformed.
pub const FALLBACK_PRIMARY: &str = "#6366F1";
/// Fallback page background.
pub const FALLBACK_BACKGROUND: &str = "#FFFFFF";
/// Fallback highlight color.
pub const FALLBACK_ACCENT: &str = "#F59E0B";

/// Blend ratio toward black for derived sub-section backgrounds.
pub const PRIMARY_DARKEN_RATIO: f32 = 0.25;

/// The resolved colors a theme renders with.
#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: String,
    pub background: String,
    pub accent: String,
    /// Text color against the page background.
    pub foreground: &'static str,
    /// Text color against primary-filled surfaces.
    pub on_primary: &'static str,
    /// Text color against accent-filled surfaces.
    pub on_accent: &'static str,
    /// Primary blended toward black, for sub-section backgrounds.
    pub primary_dark: String,
}

impl Palette {
    /// Resolve the record's colors, substituting fallbacks for anything
    /// absent or malformed, and derive the contrast pairs.
    pub fn derive(record: &PortfolioRecord) -> Self {
        let primary = resolve_color(record.primary_color.as_deref(), FALLBACK_PRIMARY);
        let background = resolve_color(record.background_color.as_deref(), FALLBACK_BACKGROUND);
        let accent = resolve_color(record.accent_color.as_deref(), FALLBACK_ACCENT);

        Palette {
            foreground: contrast_color(Some(&background)),
            on_primary: contrast_color(Some(&primary)),
            on_accent: contrast_color(Some(&accent)),
            primary_dark: darken(&primary, PRIMARY_DARKEN_RATIO),
            primary,
            background,
            accent,
        }
    }
}

fn resolve_color(value: Option<&str>, fallback: &'static str) -> String {
    match value {
        Some(value) if Rgb::from_hex(value).is_some() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Which sections render, computed once from the visibility flags and the
/// record's actual content. A flagged section with no renderable content is
/// treated as hidden everywhere, including navigation.
#[derive(Debug)]
pub struct SectionPlan<'a> {
    pub about: bool,
    pub fun_fact: bool,
    pub academic: Vec<&'a AcademicEntry>,
    pub projects: Vec<&'a ProjectEntry>,
    /// Up to two work-history entries, for themes with fixed card slots.
    pub experience: Vec<&'a ProjectEntry>,
    pub skills: Vec<&'a str>,
    pub contact: bool,
    pub resume_link: bool,
}

impl<'a> SectionPlan<'a> {
    pub fn for_record(record: &'a PortfolioRecord) -> Self {
        let about = record.show_about_section
            && !record.about_me.as_deref().unwrap_or("").trim().is_empty();
        let fun_fact = about
            && record.show_fun_fact
            && !record.fun_fact.as_deref().unwrap_or("").trim().is_empty();

        let academic = if record.show_academic_section {
            record.renderable_academic_entries()
        } else {
            Vec::new()
        };
        let projects = if record.show_projects_section {
            record.renderable_projects()
        } else {
            Vec::new()
        };
        let experience = if record.show_experience_section {
            record.renderable_projects().into_iter().take(2).collect()
        } else {
            Vec::new()
        };
        let skills = if record.show_skills_section {
            record.skill_tags()
        } else {
            Vec::new()
        };

        let has_contact_content = !record.contact_email.trim().is_empty()
            || record.linkedin_url.is_some()
            || record.github_url.is_some()
            || record.instagram_url.is_some();
        let contact = record.show_contact_section && has_contact_content;
        let resume_link = contact
            && record.show_resume_link
            && !record.resume_url.as_deref().unwrap_or("").trim().is_empty();

        SectionPlan {
            about,
            fun_fact,
            academic,
            projects,
            experience,
            skills,
            contact,
            resume_link,
        }
    }

    pub fn show_academic(&self) -> bool {
        !self.academic.is_empty()
    }

    pub fn show_projects(&self) -> bool {
        !self.projects.is_empty()
    }

    pub fn show_experience(&self) -> bool {
        !self.experience.is_empty()
    }

    pub fn show_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}

/// Identifier-safe variant of the person's name for the generated
/// component, e.g. `"Ada Lovelace"` becomes `AdaLovelacePortfolio`.
pub fn component_ident(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let pascal = cleaned.to_case(Case::Pascal);
    if pascal.is_empty() {
        "MyPortfolio".to_string()
    } else if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        // Identifiers cannot start with a digit.
        format!("My{pascal}Portfolio")
    } else {
        format!("{pascal}Portfolio")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::record::{AcademicEntry, ProjectEntry};

    fn project(name: &str) -> ProjectEntry {
        ProjectEntry {
            name: name.to_string(),
            description: "A small tool.".to_string(),
            technologies: "Rust".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_palette_fallbacks() {
        let record = PortfolioRecord {
            primary_color: Some("not-a-color".to_string()),
            background_color: None,
            accent_color: Some("#AA0000".to_string()),
            ..Default::default()
        };
        let palette = Palette::derive(&record);
        assert_eq!(palette.primary, FALLBACK_PRIMARY);
        assert_eq!(palette.background, FALLBACK_BACKGROUND);
        assert_eq!(palette.accent, "#AA0000");
        assert_eq!(palette.foreground, "#000000");
        assert_eq!(palette.on_accent, "#FFFFFF");
    }

    #[test]
    fn test_palette_darker_primary() {
        let record = PortfolioRecord {
            primary_color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let palette = Palette::derive(&record);
        assert_eq!(palette.primary_dark, "#bf0000");
    }

    #[test]
    fn test_flagged_section_without_content_is_hidden() {
        let record = PortfolioRecord {
            show_projects_section: true,
            show_academic_section: true,
            academic_entries: vec![AcademicEntry {
                qualification: "  ".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let plan = SectionPlan::for_record(&record);
        assert!(!plan.show_projects());
        assert!(!plan.show_academic());
    }

    #[test]
    fn test_unflagged_section_with_content_is_hidden() {
        let record = PortfolioRecord {
            show_projects_section: false,
            projects: vec![project("Analytical Engine")],
            ..Default::default()
        };
        let plan = SectionPlan::for_record(&record);
        assert!(!plan.show_projects());
    }

    #[test]
    fn test_experience_takes_first_two_projects() {
        let record = PortfolioRecord {
            show_experience_section: true,
            projects: vec![project("One"), project("Two"), project("Three")],
            ..Default::default()
        };
        let plan = SectionPlan::for_record(&record);
        assert_eq!(plan.experience.len(), 2);
        assert_eq!(plan.experience[0].name, "One");
    }

    #[test]
    fn test_fun_fact_requires_about() {
        let record = PortfolioRecord {
            show_about_section: false,
            show_fun_fact: true,
            fun_fact: Some("I collect typewriters.".to_string()),
            ..Default::default()
        };
        assert!(!SectionPlan::for_record(&record).fun_fact);
    }

    #[test]
    fn test_component_ident() {
        assert_eq!(component_ident("Ada Lovelace"), "AdaLovelacePortfolio");
        assert_eq!(component_ident("!!!"), "MyPortfolio");
        assert_eq!(component_ident(""), "MyPortfolio");
        // Leading digits get a prefix so the identifier stays valid.
        assert!(component_ident("42nd Street").starts_with("My42"));
    }
}
