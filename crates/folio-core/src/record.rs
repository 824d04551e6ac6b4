//! The validated portfolio record consumed by the theme generators.
//!
//! Records arrive from the form collaborator already validated (required
//! fields present, lengths and URL shapes checked). The engine treats them
//! as read-only and defends only against optional fields being absent or
//! empty.

use serde::{Deserialize, Serialize};

/// One project in the portfolio, identified by its list position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project name (1-100 chars).
    pub name: String,
    /// What the project does (5-1000 chars).
    pub description: String,
    /// Comma-separated technology list (2-200 chars).
    pub technologies: String,
    /// Link to the running project.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Link to the source repository.
    #[serde(default)]
    pub repo_url: Option<String>,
    /// Screenshot or cover image; themes substitute a placeholder when absent.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProjectEntry {
    /// Whether the entry carries enough content to render a card.
    pub fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// One academic milestone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicEntry {
    /// Degree or certificate title (1-150 chars).
    pub qualification: String,
    /// Awarding institution (2-150 chars).
    pub institution: String,
    /// Free text, so values like "Expected May 2025" are valid (4-50 chars).
    pub graduation_year: String,
    /// Grade or GPA text.
    #[serde(default)]
    pub grades: Option<String>,
    /// Longer description of the course or thesis.
    #[serde(default)]
    pub description: Option<String>,
    /// Institution or campus image; themes substitute a placeholder when absent.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AcademicEntry {
    /// Whether the entry carries enough content to render a card.
    pub fn is_renderable(&self) -> bool {
        !self.qualification.trim().is_empty()
    }
}

/// The closed set of presentation themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Classic,
    Creative,
    Playful,
}

impl Theme {
    /// Every theme, in the stable order exposed to the selection UI.
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Creative, Theme::Playful];

    /// The registry key for this theme.
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Creative => "creative",
            Theme::Playful => "playful",
        }
    }

    /// Look up a theme by its registry key.
    pub fn from_key(key: &str) -> Option<Theme> {
        Theme::ALL.iter().copied().find(|theme| theme.key() == key)
    }

    /// Display name used in generated headings and error records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Creative => "Creative",
            Theme::Playful => "Playful",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Classic
    }
}

/// The validated input record describing one person's portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    /// The person's name; the one field generation cannot proceed without.
    pub your_name: String,

    /// Hero headline, e.g. a role or short slogan.
    #[serde(default)]
    pub hero_title: Option<String>,
    /// Secondary hero line.
    #[serde(default)]
    pub hero_tagline: Option<String>,
    /// Label for the hero call-to-action button.
    #[serde(default)]
    pub hero_cta_text: Option<String>,
    /// Hero portrait or banner image.
    #[serde(default)]
    pub hero_image_url: Option<String>,

    /// Biography text; may contain embedded newlines.
    #[serde(default)]
    pub about_me: Option<String>,
    /// Comma-separated skills text.
    #[serde(default)]
    pub skills: Option<String>,
    /// One-liner rendered inside the about section.
    #[serde(default)]
    pub fun_fact: Option<String>,

    /// Academic milestones, newest first (0-6 entries).
    #[serde(default)]
    pub academic_entries: Vec<AcademicEntry>,
    /// Projects, strongest first (0-6 entries).
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    /// Contact email; validated upstream.
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,

    /// Brand color, `#` + 6 hex digits when present.
    #[serde(default)]
    pub primary_color: Option<String>,
    /// Page background color.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Highlight color.
    #[serde(default)]
    pub accent_color: Option<String>,

    /// Selected presentation theme.
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub show_about_section: bool,
    /// Sub-toggle of the about section.
    #[serde(default)]
    pub show_fun_fact: bool,
    #[serde(default)]
    pub show_academic_section: bool,
    #[serde(default)]
    pub show_projects_section: bool,
    /// Gates the work-history cards in themes that render them.
    #[serde(default)]
    pub show_experience_section: bool,
    #[serde(default)]
    pub show_skills_section: bool,
    #[serde(default)]
    pub show_contact_section: bool,
    /// Sub-toggle of the contact section.
    #[serde(default)]
    pub show_resume_link: bool,
}

impl PortfolioRecord {
    /// Split the skills text into trimmed, non-empty tags.
    pub fn skill_tags(&self) -> Vec<&str> {
        self.skills
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Academic entries with enough content to render.
    pub fn renderable_academic_entries(&self) -> Vec<&AcademicEntry> {
        self.academic_entries
            .iter()
            .filter(|entry| entry.is_renderable())
            .collect()
    }

    /// Projects with enough content to render.
    pub fn renderable_projects(&self) -> Vec<&ProjectEntry> {
        self.projects
            .iter()
            .filter(|entry| entry.is_renderable())
            .collect()
    }

    /// Whether the minimal identity required for generation is present.
    pub fn has_identity(&self) -> bool {
        !self.your_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_keys_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_key(theme.key()), Some(theme));
        }
        assert_eq!(Theme::from_key("nonexistent-theme"), None);
    }

    #[test]
    fn test_record_deserializes_from_camel_case() {
        let record: PortfolioRecord = serde_json::from_str(
            r##"{
                "yourName": "Ada Lovelace",
                "heroTitle": "Engineer",
                "theme": "classic",
                "primaryColor": "#112233",
                "contactEmail": "a@b.com",
                "showContactSection": true,
                "projects": [],
                "academicEntries": []
            }"##,
        )
        .unwrap();
        assert_eq!(record.your_name, "Ada Lovelace");
        assert_eq!(record.theme, Theme::Classic);
        assert!(record.show_contact_section);
        assert!(!record.show_about_section);
        assert_eq!(record.hero_tagline, None);
    }

    #[test]
    fn test_skill_tags_trims_and_drops_blanks() {
        let record = PortfolioRecord {
            skills: Some(" Rust , , TypeScript,SQL ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.skill_tags(), vec!["Rust", "TypeScript", "SQL"]);
    }

    #[test]
    fn test_renderable_entries_skip_blank_discriminators() {
        let record = PortfolioRecord {
            academic_entries: vec![
                AcademicEntry {
                    qualification: "BSc Mathematics".to_string(),
                    ..Default::default()
                },
                AcademicEntry {
                    qualification: "   ".to_string(),
                    ..Default::default()
                },
            ],
            projects: vec![ProjectEntry::default()],
            ..Default::default()
        };
        assert_eq!(record.renderable_academic_entries().len(), 1);
        assert!(record.renderable_projects().is_empty());
    }
}
