//! The Classic theme: serif typography, a single-column document with an
//! anchored nav, and a strict top-to-bottom section order. Projects render
//! as a two-up grid of cards.

use folio_core::errors::Result;
use folio_core::escape;
use folio_core::record::{PortfolioRecord, Theme};

use crate::export;
use crate::page::{img_tag, mailto_href, nav_link, root_variables, PreviewShell};
use crate::plan::{component_ident, Palette, SectionPlan};

use super::{require_identity, GeneratedPair, ThemeGenerator};

const FONT_LINKS: &str = concat!(
    "  <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\" />\n",
    "  <link href=\"https://fonts.googleapis.com/css2?family=Playfair+Display:wght@500;700&family=Lora:ital,wght@0,400;0,500;1,400&display=swap\" rel=\"stylesheet\" />\n",
);

const PROJECT_IMAGE_FALLBACK: &str = "https://placehold.co/640x360?text=Project";
const ACADEMIC_IMAGE_FALLBACK: &str = "https://placehold.co/480x320?text=Institution";

/// Scroll-position nav highlighting. Static text; no record content.
const NAV_SCRIPT: &str = r#"(function () {
  var links = Array.prototype.slice.call(document.querySelectorAll('.masthead nav a'));
  var sections = links
    .map(function (link) { return document.querySelector(link.getAttribute('href')); })
    .filter(Boolean);
  function highlight() {
    var offset = window.scrollY + 120;
    var activeId = null;
    sections.forEach(function (section) {
      if (section.offsetTop <= offset) activeId = section.id;
    });
    links.forEach(function (link) {
      link.classList.toggle('active', link.getAttribute('href') === '#' + activeId);
    });
  }
  window.addEventListener('scroll', highlight, { passive: true });
  highlight();
})();"#;

const BASE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: 'Lora', Georgia, serif; line-height: 1.65; }
h1, h2, h3 { font-family: 'Playfair Display', Georgia, serif; line-height: 1.2; margin: 0 0 0.5rem; }
a { color: var(--primary); }
.page { background-color: var(--background); color: var(--foreground); min-height: 100vh; }
.masthead { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: baseline; padding: 1rem 2rem; background-color: var(--background); border-bottom: 1px solid var(--primary); z-index: 10; }
.masthead .wordmark { font-family: 'Playfair Display', Georgia, serif; font-size: 1.25rem; font-weight: 700; }
.masthead nav a { margin-left: 1.25rem; text-decoration: none; color: var(--foreground); }
.masthead nav a.active { color: var(--primary); border-bottom: 2px solid var(--accent); }
.hero { max-width: 46rem; margin: 0 auto; padding: 5rem 2rem 4rem; text-align: center; }
.hero h1 { font-size: 3rem; }
.hero .title { font-size: 1.4rem; color: var(--primary); margin: 0.25rem 0; }
.hero .tagline { font-style: italic; margin: 0.75rem 0 1.5rem; }
.hero img { max-width: 220px; border-radius: 50%; margin-bottom: 1.5rem; }
.hero .cta { display: inline-block; padding: 0.7rem 1.6rem; background-color: var(--primary); color: var(--on-primary); text-decoration: none; border-radius: 2px; }
section.block { max-width: 46rem; margin: 0 auto; padding: 3rem 2rem; border-top: 1px solid rgba(128, 128, 128, 0.25); }
section.block h2 { font-size: 2rem; }
.fun-fact { margin-top: 1.5rem; padding: 1rem 1.25rem; background-color: var(--primary-dark); color: var(--on-primary); border-radius: 2px; }
.entry { margin-top: 2rem; display: flex; gap: 1.25rem; }
.entry img { width: 140px; height: 100px; object-fit: cover; border-radius: 2px; }
.entry .year { color: var(--primary); font-weight: 500; }
.entry .grades { font-style: italic; }
.project-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-top: 2rem; }
.project-card { border: 1px solid rgba(128, 128, 128, 0.3); border-radius: 2px; overflow: hidden; }
.project-card img { width: 100%; height: 160px; object-fit: cover; display: block; }
.project-card .card-body { padding: 1rem 1.25rem 1.25rem; }
.project-card .tech { font-size: 0.85rem; color: var(--primary); margin: 0.25rem 0 0.75rem; }
.project-card .links a { margin-right: 1rem; }
.skill-list { columns: 2; padding-left: 1.25rem; margin-top: 1.5rem; }
.contact-links { list-style: none; padding: 0; margin-top: 1.5rem; }
.contact-links li { margin-bottom: 0.5rem; }
.site-footer { text-align: center; padding: 2rem; font-size: 0.85rem; border-top: 1px solid rgba(128, 128, 128, 0.25); }
@media (max-width: 640px) {
  .project-grid { grid-template-columns: 1fr; }
  .entry { flex-direction: column; }
  .skill-list { columns: 1; }
}"#;

/// Classic theme generator.
#[derive(Debug, Default)]
pub struct ClassicGenerator;

impl ClassicGenerator {
    pub fn new() -> Self {
        Self
    }

    fn stylesheet(palette: &Palette) -> String {
        let mut css = root_variables(palette);
        css.push_str(BASE_CSS);
        css
    }

    fn masthead(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut nav = String::new();
        if plan.about {
            nav.push_str(&nav_link("about", "About", "nav-item"));
        }
        if plan.show_academic() {
            nav.push_str(&nav_link("education", "Education", "nav-item"));
        }
        if plan.show_projects() {
            nav.push_str(&nav_link("projects", "Projects", "nav-item"));
        }
        if plan.show_skills() {
            nav.push_str(&nav_link("skills", "Skills", "nav-item"));
        }
        if plan.contact {
            nav.push_str(&nav_link("contact", "Contact", "nav-item"));
        }
        format!(
            "<header class=\"masthead\"><span class=\"wordmark\">{}</span><nav>{}</nav></header>\n",
            escape::markup_text(Some(&record.your_name)),
            nav,
        )
    }

    fn hero(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from("<section class=\"hero\" id=\"top\">\n");
        if let Some(image) = record.hero_image_url.as_deref().filter(|v| !v.trim().is_empty()) {
            html.push_str("  ");
            html.push_str(&img_tag(
                Some(image),
                "",
                &format!("Portrait of {}", record.your_name),
                "portrait",
            ));
            html.push('\n');
        }
        html.push_str(&format!(
            "  <h1>{}</h1>\n",
            escape::markup_text(Some(&record.your_name))
        ));
        if let Some(title) = record.hero_title.as_deref() {
            html.push_str(&format!(
                "  <p class=\"title\">{}</p>\n",
                escape::markup_text(Some(title))
            ));
        }
        if let Some(tagline) = record.hero_tagline.as_deref() {
            html.push_str(&format!(
                "  <p class=\"tagline\">{}</p>\n",
                escape::markup_text_with_breaks(Some(tagline))
            ));
        }
        if plan.contact {
            let label = record.hero_cta_text.as_deref().unwrap_or("Get in Touch");
            html.push_str(&format!(
                "  <a class=\"cta\" href=\"#contact\">{}</a>\n",
                escape::markup_text(Some(label))
            ));
        }
        html.push_str("</section>\n");
        html
    }

    fn about(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from("<section class=\"block\" id=\"about\">\n  <h2>About</h2>\n");
        html.push_str(&format!(
            "  <p>{}</p>\n",
            escape::markup_text_with_breaks(record.about_me.as_deref())
        ));
        if plan.fun_fact {
            html.push_str(&format!(
                "  <p class=\"fun-fact\">Fun fact: {}</p>\n",
                escape::markup_text(record.fun_fact.as_deref())
            ));
        }
        html.push_str("</section>\n");
        html
    }

    fn education(plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"block\" id=\"education\">\n  <h2>Education</h2>\n");
        for entry in &plan.academic {
            html.push_str("  <div class=\"entry\">\n    ");
            html.push_str(&img_tag(
                entry.image_url.as_deref(),
                ACADEMIC_IMAGE_FALLBACK,
                &entry.institution,
                "entry-img",
            ));
            html.push_str("\n    <div>\n");
            html.push_str(&format!(
                "      <h3>{}</h3>\n",
                escape::markup_text(Some(&entry.qualification))
            ));
            html.push_str(&format!(
                "      <p>{} <span class=\"year\">{}</span></p>\n",
                escape::markup_text(Some(&entry.institution)),
                escape::markup_text(Some(&entry.graduation_year)),
            ));
            if let Some(grades) = entry.grades.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "      <p class=\"grades\">{}</p>\n",
                    escape::markup_text(Some(grades))
                ));
            }
            if let Some(description) = entry.description.as_deref().filter(|v| !v.trim().is_empty())
            {
                html.push_str(&format!(
                    "      <p>{}</p>\n",
                    escape::markup_text_with_breaks(Some(description))
                ));
            }
            html.push_str("    </div>\n  </div>\n");
        }
        html.push_str("</section>\n");
        html
    }

    fn projects(plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"block\" id=\"projects\">\n  <h2>Projects</h2>\n  <div class=\"project-grid\">\n");
        for project in &plan.projects {
            html.push_str("    <article class=\"project-card\">\n      ");
            html.push_str(&img_tag(
                project.image_url.as_deref(),
                PROJECT_IMAGE_FALLBACK,
                &project.name,
                "card-img",
            ));
            html.push_str("\n      <div class=\"card-body\">\n");
            html.push_str(&format!(
                "        <h3>{}</h3>\n",
                escape::markup_text(Some(&project.name))
            ));
            html.push_str(&format!(
                "        <p class=\"tech\">{}</p>\n",
                escape::markup_text(Some(&project.technologies))
            ));
            html.push_str(&format!(
                "        <p>{}</p>\n",
                escape::markup_text_with_breaks(Some(&project.description))
            ));
            let mut links = String::new();
            if let Some(url) = project.live_url.as_deref().filter(|v| !v.trim().is_empty()) {
                links.push_str(&format!(
                    "<a href=\"{}\">View Live</a>",
                    escape::markup_attr(Some(url))
                ));
            }
            if let Some(url) = project.repo_url.as_deref().filter(|v| !v.trim().is_empty()) {
                links.push_str(&format!(
                    "<a href=\"{}\">Source</a>",
                    escape::markup_attr(Some(url))
                ));
            }
            if !links.is_empty() {
                html.push_str(&format!("        <p class=\"links\">{}</p>\n", links));
            }
            html.push_str("      </div>\n    </article>\n");
        }
        html.push_str("  </div>\n</section>\n");
        html
    }

    fn skills(plan: &SectionPlan) -> String {
        let mut html = String::from("<section class=\"block\" id=\"skills\">\n  <h2>Skills</h2>\n  <ul class=\"skill-list\">\n");
        for tag in &plan.skills {
            html.push_str(&format!(
                "    <li>{}</li>\n",
                escape::markup_text(Some(tag))
            ));
        }
        html.push_str("  </ul>\n</section>\n");
        html
    }

    fn contact(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"block\" id=\"contact\">\n  <h2>Contact</h2>\n  <ul class=\"contact-links\">\n");
        if !record.contact_email.trim().is_empty() {
            html.push_str(&format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                mailto_href(&record.contact_email),
                escape::markup_text(Some(&record.contact_email)),
            ));
        }
        for (url, label) in [
            (record.linkedin_url.as_deref(), "LinkedIn"),
            (record.github_url.as_deref(), "GitHub"),
            (record.instagram_url.as_deref(), "Instagram"),
        ] {
            if let Some(url) = url.filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "    <li><a href=\"{}\">{}</a></li>\n",
                    escape::markup_attr(Some(url)),
                    label,
                ));
            }
        }
        if plan.resume_link {
            html.push_str(&format!(
                "    <li><a href=\"{}\">Résumé</a></li>\n",
                escape::markup_attr(record.resume_url.as_deref()),
            ));
        }
        html.push_str("  </ul>\n</section>\n");
        html
    }

    fn body(record: &PortfolioRecord, plan: &SectionPlan, palette: &Palette) -> String {
        let mut body = format!(
            "<div class=\"page\" style=\"background-color: {}; color: {};\">\n",
            escape::style_value(Some(&palette.background)),
            escape::style_value(Some(palette.foreground)),
        );
        body.push_str(&Self::masthead(record, plan));
        body.push_str(&Self::hero(record, plan));
        if plan.about {
            body.push_str(&Self::about(record, plan));
        }
        if plan.show_academic() {
            body.push_str(&Self::education(plan));
        }
        if plan.show_projects() {
            body.push_str(&Self::projects(plan));
        }
        if plan.show_skills() {
            body.push_str(&Self::skills(plan));
        }
        if plan.contact {
            body.push_str(&Self::contact(record, plan));
        }
        body.push_str(&format!(
            "<footer class=\"site-footer\">Portfolio of {}</footer>\n",
            escape::markup_text(Some(&record.your_name)),
        ));
        body.push_str("</div>\n");
        body
    }

    fn component_jsx(component_name: &str) -> String {
        format!(
            "export default function {}() {{\n{}",
            component_name, COMPONENT_BODY,
        )
    }
}

impl ThemeGenerator for ClassicGenerator {
    fn theme(&self) -> Theme {
        Theme::Classic
    }

    fn generate(&self, record: &PortfolioRecord) -> Result<GeneratedPair> {
        require_identity(record)?;
        let plan = SectionPlan::for_record(record);
        let palette = Palette::derive(record);

        let preview_document = PreviewShell {
            title: format!("{} | Portfolio", record.your_name),
            font_links: FONT_LINKS,
            style: Self::stylesheet(&palette),
            body: Self::body(record, &plan, &palette),
            script: NAV_SCRIPT,
        }
        .render();

        let component_name = component_ident(&record.your_name);
        let exported_source = export::assemble(
            Theme::Classic,
            record,
            &component_name,
            &Self::component_jsx(&component_name),
        );

        Ok(GeneratedPair {
            exported_source,
            preview_document,
        })
    }
}

/// Everything after the component's opening line. The record is read at
/// runtime from the embedded literal, so the body itself is fixed source.
const COMPONENT_BODY: &str = r##"  const record = loadRecord();
  const palette = derivePalette(record);
  const visible = sectionVisibility(record);
  const projects = renderableProjects(record);
  const academicEntries = renderableAcademicEntries(record);
  const tags = skillTags(record);

  const navItems = [
    visible.about && { href: '#about', label: 'About' },
    visible.academic && { href: '#education', label: 'Education' },
    visible.projects && { href: '#projects', label: 'Projects' },
    visible.skills && { href: '#skills', label: 'Skills' },
    visible.contact && { href: '#contact', label: 'Contact' },
  ].filter(Boolean);

  const serif = "'Playfair Display', Georgia, serif";
  const page = {
    backgroundColor: palette.background,
    color: palette.foreground,
    fontFamily: "'Lora', Georgia, serif",
    lineHeight: 1.65,
    minHeight: '100vh',
  };
  const block = {
    maxWidth: '46rem',
    margin: '0 auto',
    padding: '3rem 2rem',
    borderTop: '1px solid rgba(128, 128, 128, 0.25)',
  };

  return (
    <div style={page}>
      <header
        style={{
          position: 'sticky',
          top: 0,
          display: 'flex',
          justifyContent: 'space-between',
          alignItems: 'baseline',
          padding: '1rem 2rem',
          backgroundColor: palette.background,
          borderBottom: '1px solid ' + palette.primary,
        }}
      >
        <span style={{ fontFamily: serif, fontWeight: 700 }}>{record.yourName}</span>
        <nav>
          {navItems.map((item) => (
            <a
              key={item.href}
              href={item.href}
              style={{ marginLeft: '1.25rem', textDecoration: 'none', color: palette.foreground }}
            >
              {item.label}
            </a>
          ))}
        </nav>
      </header>

      <section id="top" style={{ maxWidth: '46rem', margin: '0 auto', padding: '5rem 2rem 4rem', textAlign: 'center' }}>
        {hasText(record.heroImageUrl) && (
          <img
            src={record.heroImageUrl}
            alt={'Portrait of ' + record.yourName}
            style={{ maxWidth: 220, borderRadius: '50%', marginBottom: '1.5rem' }}
          />
        )}
        <h1 style={{ fontFamily: serif, fontSize: '3rem', margin: 0 }}>{record.yourName}</h1>
        {hasText(record.heroTitle) && (
          <p style={{ fontSize: '1.4rem', color: palette.primary, margin: '0.25rem 0' }}>{record.heroTitle}</p>
        )}
        {hasText(record.heroTagline) && (
          <p style={{ fontStyle: 'italic', margin: '0.75rem 0 1.5rem' }}>{withBreaks(record.heroTagline)}</p>
        )}
        {visible.contact && (
          <a
            href="#contact"
            style={{
              display: 'inline-block',
              padding: '0.7rem 1.6rem',
              backgroundColor: palette.primary,
              color: palette.onPrimary,
              textDecoration: 'none',
            }}
          >
            {hasText(record.heroCtaText) ? record.heroCtaText : 'Get in Touch'}
          </a>
        )}
      </section>

      {visible.about && (
        <section id="about" style={block}>
          <h2 style={{ fontFamily: serif, fontSize: '2rem' }}>About</h2>
          <p>{withBreaks(record.aboutMe)}</p>
          {visible.funFact && (
            <p style={{ padding: '1rem 1.25rem', backgroundColor: palette.primaryDark, color: palette.onPrimary }}>
              Fun fact: {record.funFact}
            </p>
          )}
        </section>
      )}

      {visible.academic && (
        <section id="education" style={block}>
          <h2 style={{ fontFamily: serif, fontSize: '2rem' }}>Education</h2>
          {academicEntries.map((entry, index) => (
            <div key={index} style={{ marginTop: '2rem', display: 'flex', gap: '1.25rem' }}>
              <img
                src={hasText(entry.imageUrl) ? entry.imageUrl : 'https://placehold.co/480x320?text=Institution'}
                alt={entry.institution}
                style={{ width: 140, height: 100, objectFit: 'cover' }}
              />
              <div>
                <h3 style={{ fontFamily: serif, margin: 0 }}>{entry.qualification}</h3>
                <p>
                  {entry.institution} <span style={{ color: palette.primary }}>{entry.graduationYear}</span>
                </p>
                {hasText(entry.grades) && <p style={{ fontStyle: 'italic' }}>{entry.grades}</p>}
                {hasText(entry.description) && <p>{withBreaks(entry.description)}</p>}
              </div>
            </div>
          ))}
        </section>
      )}

      {visible.projects && (
        <section id="projects" style={block}>
          <h2 style={{ fontFamily: serif, fontSize: '2rem' }}>Projects</h2>
          <div style={{ display: 'grid', gridTemplateColumns: 'repeat(2, 1fr)', gap: '1.5rem', marginTop: '2rem' }}>
            {projects.map((project, index) => (
              <article key={index} style={{ border: '1px solid rgba(128, 128, 128, 0.3)', overflow: 'hidden' }}>
                <img
                  src={hasText(project.imageUrl) ? project.imageUrl : 'https://placehold.co/640x360?text=Project'}
                  alt={project.name}
                  style={{ width: '100%', height: 160, objectFit: 'cover', display: 'block' }}
                />
                <div style={{ padding: '1rem 1.25rem 1.25rem' }}>
                  <h3 style={{ fontFamily: serif, margin: 0 }}>{project.name}</h3>
                  <p style={{ fontSize: '0.85rem', color: palette.primary }}>{project.technologies}</p>
                  <p>{withBreaks(project.description)}</p>
                  <p>
                    {hasText(project.liveUrl) && (
                      <a href={project.liveUrl} style={{ color: palette.primary, marginRight: '1rem' }}>
                        View Live
                      </a>
                    )}
                    {hasText(project.repoUrl) && (
                      <a href={project.repoUrl} style={{ color: palette.primary }}>
                        Source
                      </a>
                    )}
                  </p>
                </div>
              </article>
            ))}
          </div>
        </section>
      )}

      {visible.skills && (
        <section id="skills" style={block}>
          <h2 style={{ fontFamily: serif, fontSize: '2rem' }}>Skills</h2>
          <ul style={{ columns: 2, paddingLeft: '1.25rem', marginTop: '1.5rem' }}>
            {tags.map((tag) => (
              <li key={tag}>{tag}</li>
            ))}
          </ul>
        </section>
      )}

      {visible.contact && (
        <section id="contact" style={block}>
          <h2 style={{ fontFamily: serif, fontSize: '2rem' }}>Contact</h2>
          <ul style={{ listStyle: 'none', padding: 0, marginTop: '1.5rem' }}>
            {hasText(record.contactEmail) && (
              <li style={{ marginBottom: '0.5rem' }}>
                <a href={'mailto:' + record.contactEmail} style={{ color: palette.primary }}>
                  {record.contactEmail}
                </a>
              </li>
            )}
            {hasText(record.linkedinUrl) && (
              <li style={{ marginBottom: '0.5rem' }}>
                <a href={record.linkedinUrl} style={{ color: palette.primary }}>LinkedIn</a>
              </li>
            )}
            {hasText(record.githubUrl) && (
              <li style={{ marginBottom: '0.5rem' }}>
                <a href={record.githubUrl} style={{ color: palette.primary }}>GitHub</a>
              </li>
            )}
            {hasText(record.instagramUrl) && (
              <li style={{ marginBottom: '0.5rem' }}>
                <a href={record.instagramUrl} style={{ color: palette.primary }}>Instagram</a>
              </li>
            )}
            {visible.resume && (
              <li style={{ marginBottom: '0.5rem' }}>
                <a href={record.resumeUrl} style={{ color: palette.primary }}>Résumé</a>
              </li>
            )}
          </ul>
        </section>
      )}

      <footer style={{ textAlign: 'center', padding: '2rem', fontSize: '0.85rem' }}>
        Portfolio of {record.yourName}
      </footer>
    </div>
  );
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> PortfolioRecord {
        PortfolioRecord {
            your_name: "Ada Lovelace".to_string(),
            hero_title: Some("Engineer".to_string()),
            contact_email: "a@b.com".to_string(),
            show_contact_section: true,
            primary_color: Some("#112233".to_string()),
            background_color: Some("#FFFFFF".to_string()),
            accent_color: Some("#AA0000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_preview_contains_escaped_name_and_contact() {
        let pair = ClassicGenerator::new().generate(&base_record()).unwrap();
        assert!(pair.preview_document.contains("Ada Lovelace"));
        assert!(pair.preview_document.contains("mailto:a@b.com"));
        assert!(pair.preview_document.contains("color: #000000"));
    }

    #[test]
    fn test_preview_escapes_markup_in_name() {
        let mut record = base_record();
        record.your_name = "Ada <script>alert(1)</script>".to_string();
        let pair = ClassicGenerator::new().generate(&record).unwrap();
        assert!(!pair.preview_document.contains("<script>alert(1)"));
        assert!(pair
            .preview_document
            .contains("Ada &lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_flagged_empty_projects_not_linked_or_rendered() {
        let mut record = base_record();
        record.show_projects_section = true;
        record.projects.clear();
        let pair = ClassicGenerator::new().generate(&record).unwrap();
        assert!(!pair.preview_document.contains("href=\"#projects\""));
        assert!(!pair.preview_document.contains("<h2>Projects</h2>"));
    }

    #[test]
    fn test_exported_source_names_component() {
        let pair = ClassicGenerator::new().generate(&base_record()).unwrap();
        assert!(pair
            .exported_source
            .contains("export default function AdaLovelacePortfolio()"));
        assert!(pair.exported_source.contains("const EMBEDDED_RECORD"));
    }

    #[test]
    fn test_missing_identity_is_malformed() {
        let mut record = base_record();
        record.your_name = "   ".to_string();
        let err = ClassicGenerator::new().generate(&record).unwrap_err();
        assert!(matches!(
            err,
            folio_core::errors::GenerationError::MalformedRecord(_)
        ));
    }
}
