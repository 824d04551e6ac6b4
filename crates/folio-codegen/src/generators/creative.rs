//! The Creative theme: sans-serif typography, a fixed nav that gains its
//! background after scrolling past a threshold, a split hero layout, and
//! skills rendered as pill tags.

use folio_core::errors::Result;
use folio_core::escape;
use folio_core::record::{PortfolioRecord, Theme};

use crate::export;
use crate::page::{img_tag, mailto_href, nav_link, root_variables, PreviewShell};
use crate::plan::{component_ident, Palette, SectionPlan};

use super::{require_identity, GeneratedPair, ThemeGenerator};

const FONT_LINKS: &str = concat!(
    "  <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\" />\n",
    "  <link href=\"https://fonts.googleapis.com/css2?family=Poppins:wght@500;600;700&family=Inter:wght@400;500&display=swap\" rel=\"stylesheet\" />\n",
);

const HERO_IMAGE_FALLBACK: &str = "https://placehold.co/560x640?text=Portrait";
const PROJECT_IMAGE_FALLBACK: &str = "https://placehold.co/720x420?text=Project";
const ACADEMIC_IMAGE_FALLBACK: &str = "https://placehold.co/480x320?text=Institution";

/// Threshold in pixels after which the nav gains its solid background.
const NAV_SCROLL_THRESHOLD: u32 = 64;

const BASE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: 'Inter', system-ui, sans-serif; line-height: 1.6; }
h1, h2, h3 { font-family: 'Poppins', system-ui, sans-serif; margin: 0 0 0.5rem; }
.page { background-color: var(--background); color: var(--foreground); min-height: 100vh; }
.topbar { position: fixed; top: 0; left: 0; right: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2.5rem; transition: background-color 0.25s ease, box-shadow 0.25s ease; z-index: 20; }
.topbar.scrolled { background-color: var(--primary); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.18); }
.topbar.scrolled a, .topbar.scrolled .wordmark { color: var(--on-primary); }
.topbar .wordmark { font-family: 'Poppins', sans-serif; font-weight: 700; font-size: 1.1rem; color: var(--foreground); }
.topbar nav a { margin-left: 1.5rem; text-decoration: none; font-weight: 500; color: var(--foreground); }
.split-hero { display: grid; grid-template-columns: 1.1fr 0.9fr; gap: 3rem; align-items: center; max-width: 68rem; margin: 0 auto; padding: 8rem 2.5rem 5rem; }
.split-hero h1 { font-size: 3.25rem; line-height: 1.1; }
.split-hero .title { font-size: 1.3rem; color: var(--primary); font-weight: 600; margin: 0.5rem 0; }
.split-hero .tagline { margin: 1rem 0 2rem; }
.split-hero img { width: 100%; border-radius: 18px; display: block; }
.cta { display: inline-block; padding: 0.8rem 2rem; background-color: var(--accent); color: var(--on-accent); font-weight: 600; text-decoration: none; border-radius: 999px; }
section.panel { max-width: 68rem; margin: 0 auto; padding: 4rem 2.5rem; }
section.panel h2 { font-size: 2.1rem; display: inline-block; border-bottom: 4px solid var(--accent); padding-bottom: 0.35rem; margin-bottom: 1.75rem; }
.fun-fact { margin-top: 1.5rem; padding: 1.25rem 1.5rem; border-left: 5px solid var(--accent); background-color: var(--primary-dark); color: var(--on-primary); border-radius: 0 10px 10px 0; }
.timeline-entry { display: flex; gap: 1.5rem; margin-bottom: 2rem; }
.timeline-entry img { width: 150px; height: 105px; object-fit: cover; border-radius: 10px; }
.timeline-entry .year { color: var(--accent); font-weight: 600; }
.work-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.work-card { background-color: var(--primary-dark); color: var(--on-primary); border-radius: 14px; overflow: hidden; }
.work-card img { width: 100%; height: 180px; object-fit: cover; display: block; }
.work-card .card-body { padding: 1.25rem 1.5rem 1.5rem; }
.work-card .tech { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.06em; opacity: 0.85; }
.work-card a { color: var(--on-primary); font-weight: 600; margin-right: 1rem; }
.pill-row { display: flex; flex-wrap: wrap; gap: 0.6rem; }
.pill { padding: 0.45rem 1.1rem; border-radius: 999px; background-color: var(--primary); color: var(--on-primary); font-weight: 500; font-size: 0.9rem; }
.connect { text-align: center; }
.connect .links a { margin: 0 1rem; color: var(--primary); font-weight: 600; }
.to-top { position: fixed; right: 1.5rem; bottom: 1.5rem; width: 44px; height: 44px; border-radius: 50%; border: none; background-color: var(--accent); color: var(--on-accent); font-size: 1.2rem; cursor: pointer; opacity: 0; pointer-events: none; transition: opacity 0.25s ease; }
.to-top.visible { opacity: 1; pointer-events: auto; }
.site-footer { text-align: center; padding: 2.5rem; font-size: 0.85rem; opacity: 0.8; }
@media (max-width: 760px) {
  .split-hero { grid-template-columns: 1fr; padding-top: 6rem; }
  .timeline-entry { flex-direction: column; }
}"#;

/// Creative theme generator.
#[derive(Debug, Default)]
pub struct CreativeGenerator;

impl CreativeGenerator {
    pub fn new() -> Self {
        Self
    }

    fn interaction_script() -> String {
        format!(
            r#"(function () {{
  var bar = document.querySelector('.topbar');
  var toTop = document.querySelector('.to-top');
  function onScroll() {{
    var past = window.scrollY > {threshold};
    if (bar) bar.classList.toggle('scrolled', past);
    if (toTop) toTop.classList.toggle('visible', window.scrollY > 480);
  }}
  if (toTop) {{
    toTop.addEventListener('click', function () {{
      window.scrollTo({{ top: 0, behavior: 'smooth' }});
    }});
  }}
  window.addEventListener('scroll', onScroll, {{ passive: true }});
  onScroll();
}})();"#,
            threshold = NAV_SCROLL_THRESHOLD,
        )
    }

    fn stylesheet(palette: &Palette) -> String {
        let mut css = root_variables(palette);
        css.push_str(BASE_CSS);
        css
    }

    fn topbar(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut nav = String::new();
        if plan.about {
            nav.push_str(&nav_link("about", "About", "nav-item"));
        }
        if plan.show_academic() {
            nav.push_str(&nav_link("background", "Background", "nav-item"));
        }
        if plan.show_projects() {
            nav.push_str(&nav_link("work", "Work", "nav-item"));
        }
        if plan.show_skills() {
            nav.push_str(&nav_link("skills", "Skills", "nav-item"));
        }
        if plan.contact {
            nav.push_str(&nav_link("connect", "Connect", "nav-item"));
        }
        format!(
            "<header class=\"topbar\"><span class=\"wordmark\">{}</span><nav>{}</nav></header>\n",
            escape::markup_text(Some(&record.your_name)),
            nav,
        )
    }

    fn hero(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from("<section class=\"split-hero\" id=\"top\">\n  <div>\n");
        html.push_str(&format!(
            "    <h1>{}</h1>\n",
            escape::markup_text(Some(&record.your_name))
        ));
        if let Some(title) = record.hero_title.as_deref() {
            html.push_str(&format!(
                "    <p class=\"title\">{}</p>\n",
                escape::markup_text(Some(title))
            ));
        }
        if let Some(tagline) = record.hero_tagline.as_deref() {
            html.push_str(&format!(
                "    <p class=\"tagline\">{}</p>\n",
                escape::markup_text_with_breaks(Some(tagline))
            ));
        }
        if plan.contact {
            let label = record.hero_cta_text.as_deref().unwrap_or("Say Hello");
            html.push_str(&format!(
                "    <a class=\"cta\" href=\"#connect\">{}</a>\n",
                escape::markup_text(Some(label))
            ));
        }
        html.push_str("  </div>\n  <div>\n    ");
        html.push_str(&img_tag(
            record.hero_image_url.as_deref(),
            HERO_IMAGE_FALLBACK,
            &record.your_name,
            "hero-img",
        ));
        html.push_str("\n  </div>\n</section>\n");
        html
    }

    fn about(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"panel\" id=\"about\">\n  <h2>About Me</h2>\n");
        html.push_str(&format!(
            "  <p>{}</p>\n",
            escape::markup_text_with_breaks(record.about_me.as_deref())
        ));
        if plan.fun_fact {
            html.push_str(&format!(
                "  <div class=\"fun-fact\">{}</div>\n",
                escape::markup_text(record.fun_fact.as_deref())
            ));
        }
        html.push_str("</section>\n");
        html
    }

    fn background(plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"panel\" id=\"background\">\n  <h2>Background</h2>\n");
        for entry in &plan.academic {
            html.push_str("  <div class=\"timeline-entry\">\n    ");
            html.push_str(&img_tag(
                entry.image_url.as_deref(),
                ACADEMIC_IMAGE_FALLBACK,
                &entry.institution,
                "timeline-img",
            ));
            html.push_str("\n    <div>\n");
            html.push_str(&format!(
                "      <h3>{}</h3>\n",
                escape::markup_text(Some(&entry.qualification))
            ));
            html.push_str(&format!(
                "      <p>{} · <span class=\"year\">{}</span></p>\n",
                escape::markup_text(Some(&entry.institution)),
                escape::markup_text(Some(&entry.graduation_year)),
            ));
            if let Some(grades) = entry.grades.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "      <p>{}</p>\n",
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

    fn work(plan: &SectionPlan) -> String {
        let mut html = String::from(
            "<section class=\"panel\" id=\"work\">\n  <h2>Selected Work</h2>\n  <div class=\"work-grid\">\n",
        );
        for project in &plan.projects {
            html.push_str("    <article class=\"work-card\">\n      ");
            html.push_str(&img_tag(
                project.image_url.as_deref(),
                PROJECT_IMAGE_FALLBACK,
                &project.name,
                "work-img",
            ));
            html.push_str("\n      <div class=\"card-body\">\n");
            html.push_str(&format!(
                "        <p class=\"tech\">{}</p>\n",
                escape::markup_text(Some(&project.technologies))
            ));
            html.push_str(&format!(
                "        <h3>{}</h3>\n",
                escape::markup_text(Some(&project.name))
            ));
            html.push_str(&format!(
                "        <p>{}</p>\n",
                escape::markup_text_with_breaks(Some(&project.description))
            ));
            if let Some(url) = project.live_url.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "        <a href=\"{}\">Live ↗</a>\n",
                    escape::markup_attr(Some(url))
                ));
            }
            if let Some(url) = project.repo_url.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "        <a href=\"{}\">Code ↗</a>\n",
                    escape::markup_attr(Some(url))
                ));
            }
            html.push_str("      </div>\n    </article>\n");
        }
        html.push_str("  </div>\n</section>\n");
        html
    }

    fn skills(plan: &SectionPlan) -> String {
        let mut html = String::from(
            "<section class=\"panel\" id=\"skills\">\n  <h2>Skills</h2>\n  <div class=\"pill-row\">\n",
        );
        for tag in &plan.skills {
            html.push_str(&format!(
                "    <span class=\"pill\">{}</span>\n",
                escape::markup_text(Some(tag))
            ));
        }
        html.push_str("  </div>\n</section>\n");
        html
    }

    fn connect(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from(
            "<section class=\"panel connect\" id=\"connect\">\n  <h2>Let&#39;s Connect</h2>\n",
        );
        if !record.contact_email.trim().is_empty() {
            html.push_str(&format!(
                "  <p><a class=\"cta\" href=\"{}\">{}</a></p>\n",
                mailto_href(&record.contact_email),
                escape::markup_text(Some(&record.contact_email)),
            ));
        }
        let mut links = String::new();
        for (url, label) in [
            (record.linkedin_url.as_deref(), "LinkedIn"),
            (record.github_url.as_deref(), "GitHub"),
            (record.instagram_url.as_deref(), "Instagram"),
        ] {
            if let Some(url) = url.filter(|v| !v.trim().is_empty()) {
                links.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    escape::markup_attr(Some(url)),
                    label,
                ));
            }
        }
        if plan.resume_link {
            links.push_str(&format!(
                "<a href=\"{}\">Résumé</a>",
                escape::markup_attr(record.resume_url.as_deref()),
            ));
        }
        if !links.is_empty() {
            html.push_str(&format!("  <p class=\"links\">{}</p>\n", links));
        }
        html.push_str("</section>\n");
        html
    }

    fn body(record: &PortfolioRecord, plan: &SectionPlan, palette: &Palette) -> String {
        let mut body = format!(
            "<div class=\"page\" style=\"background-color: {}; color: {};\">\n",
            escape::style_value(Some(&palette.background)),
            escape::style_value(Some(palette.foreground)),
        );
        body.push_str(&Self::topbar(record, plan));
        body.push_str(&Self::hero(record, plan));
        if plan.about {
            body.push_str(&Self::about(record, plan));
        }
        if plan.show_academic() {
            body.push_str(&Self::background(plan));
        }
        if plan.show_projects() {
            body.push_str(&Self::work(plan));
        }
        if plan.show_skills() {
            body.push_str(&Self::skills(plan));
        }
        if plan.contact {
            body.push_str(&Self::connect(record, plan));
        }
        body.push_str("<button class=\"to-top\" type=\"button\" aria-label=\"Back to top\">↑</button>\n");
        body.push_str(&format!(
            "<footer class=\"site-footer\">Crafted by {}</footer>\n",
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

impl ThemeGenerator for CreativeGenerator {
    fn theme(&self) -> Theme {
        Theme::Creative
    }

    fn generate(&self, record: &PortfolioRecord) -> Result<GeneratedPair> {
        require_identity(record)?;
        let plan = SectionPlan::for_record(record);
        let palette = Palette::derive(record);

        let script = Self::interaction_script();
        let preview_document = PreviewShell {
            title: format!("{} · Portfolio", record.your_name),
            font_links: FONT_LINKS,
            style: Self::stylesheet(&palette),
            body: Self::body(record, &plan, &palette),
            script: &script,
        }
        .render();

        let component_name = component_ident(&record.your_name);
        let exported_source = export::assemble(
            Theme::Creative,
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

/// Component body for the exported source. Nav background and the
/// scroll-to-top button are driven by React state instead of class toggles.
const COMPONENT_BODY: &str = r##"  const record = loadRecord();
  const palette = derivePalette(record);
  const visible = sectionVisibility(record);
  const projects = renderableProjects(record);
  const academicEntries = renderableAcademicEntries(record);
  const tags = skillTags(record);
  const [scrolled, setScrolled] = React.useState(false);
  const [showToTop, setShowToTop] = React.useState(false);

  React.useEffect(() => {
    const onScroll = () => {
      setScrolled(window.scrollY > 64);
      setShowToTop(window.scrollY > 480);
    };
    window.addEventListener('scroll', onScroll, { passive: true });
    onScroll();
    return () => window.removeEventListener('scroll', onScroll);
  }, []);

  const navItems = [
    visible.about && { href: '#about', label: 'About' },
    visible.academic && { href: '#background', label: 'Background' },
    visible.projects && { href: '#work', label: 'Work' },
    visible.skills && { href: '#skills', label: 'Skills' },
    visible.contact && { href: '#connect', label: 'Connect' },
  ].filter(Boolean);

  const heading = { fontFamily: "'Poppins', system-ui, sans-serif" };
  const sectionTitle = {
    ...heading,
    fontSize: '2.1rem',
    display: 'inline-block',
    borderBottom: '4px solid ' + palette.accent,
    paddingBottom: '0.35rem',
    marginBottom: '1.75rem',
  };
  const panel = { maxWidth: '68rem', margin: '0 auto', padding: '4rem 2.5rem' };
  const pill = {
    padding: '0.45rem 1.1rem',
    borderRadius: 999,
    backgroundColor: palette.primary,
    color: palette.onPrimary,
    fontWeight: 500,
    fontSize: '0.9rem',
  };
  const cta = {
    display: 'inline-block',
    padding: '0.8rem 2rem',
    backgroundColor: palette.accent,
    color: palette.onAccent,
    fontWeight: 600,
    textDecoration: 'none',
    borderRadius: 999,
  };

  return (
    <div
      style={{
        backgroundColor: palette.background,
        color: palette.foreground,
        fontFamily: "'Inter', system-ui, sans-serif",
        minHeight: '100vh',
      }}
    >
      <header
        style={{
          position: 'fixed',
          top: 0,
          left: 0,
          right: 0,
          display: 'flex',
          justifyContent: 'space-between',
          alignItems: 'center',
          padding: '1rem 2.5rem',
          transition: 'background-color 0.25s ease',
          backgroundColor: scrolled ? palette.primary : 'transparent',
          color: scrolled ? palette.onPrimary : palette.foreground,
          zIndex: 20,
        }}
      >
        <span style={{ ...heading, fontWeight: 700 }}>{record.yourName}</span>
        <nav>
          {navItems.map((item) => (
            <a
              key={item.href}
              href={item.href}
              style={{ marginLeft: '1.5rem', textDecoration: 'none', fontWeight: 500, color: 'inherit' }}
            >
              {item.label}
            </a>
          ))}
        </nav>
      </header>

      <section
        id="top"
        style={{
          display: 'grid',
          gridTemplateColumns: '1.1fr 0.9fr',
          gap: '3rem',
          alignItems: 'center',
          maxWidth: '68rem',
          margin: '0 auto',
          padding: '8rem 2.5rem 5rem',
        }}
      >
        <div>
          <h1 style={{ ...heading, fontSize: '3.25rem', lineHeight: 1.1, margin: 0 }}>{record.yourName}</h1>
          {hasText(record.heroTitle) && (
            <p style={{ fontSize: '1.3rem', color: palette.primary, fontWeight: 600, margin: '0.5rem 0' }}>
              {record.heroTitle}
            </p>
          )}
          {hasText(record.heroTagline) && (
            <p style={{ margin: '1rem 0 2rem' }}>{withBreaks(record.heroTagline)}</p>
          )}
          {visible.contact && (
            <a href="#connect" style={cta}>
              {hasText(record.heroCtaText) ? record.heroCtaText : 'Say Hello'}
            </a>
          )}
        </div>
        <div>
          <img
            src={hasText(record.heroImageUrl) ? record.heroImageUrl : 'https://placehold.co/560x640?text=Portrait'}
            alt={record.yourName}
            style={{ width: '100%', borderRadius: 18, display: 'block' }}
          />
        </div>
      </section>

      {visible.about && (
        <section id="about" style={panel}>
          <h2 style={sectionTitle}>About Me</h2>
          <p>{withBreaks(record.aboutMe)}</p>
          {visible.funFact && (
            <div
              style={{
                marginTop: '1.5rem',
                padding: '1.25rem 1.5rem',
                borderLeft: '5px solid ' + palette.accent,
                backgroundColor: palette.primaryDark,
                color: palette.onPrimary,
              }}
            >
              {record.funFact}
            </div>
          )}
        </section>
      )}

      {visible.academic && (
        <section id="background" style={panel}>
          <h2 style={sectionTitle}>Background</h2>
          {academicEntries.map((entry, index) => (
            <div key={index} style={{ display: 'flex', gap: '1.5rem', marginBottom: '2rem' }}>
              <img
                src={hasText(entry.imageUrl) ? entry.imageUrl : 'https://placehold.co/480x320?text=Institution'}
                alt={entry.institution}
                style={{ width: 150, height: 105, objectFit: 'cover', borderRadius: 10 }}
              />
              <div>
                <h3 style={heading}>{entry.qualification}</h3>
                <p>
                  {entry.institution} · <span style={{ color: palette.accent, fontWeight: 600 }}>{entry.graduationYear}</span>
                </p>
                {hasText(entry.grades) && <p>{entry.grades}</p>}
                {hasText(entry.description) && <p>{withBreaks(entry.description)}</p>}
              </div>
            </div>
          ))}
        </section>
      )}

      {visible.projects && (
        <section id="work" style={panel}>
          <h2 style={sectionTitle}>Selected Work</h2>
          <div style={{ display: 'grid', gridTemplateColumns: 'repeat(auto-fit, minmax(280px, 1fr))', gap: '2rem' }}>
            {projects.map((project, index) => (
              <article
                key={index}
                style={{ backgroundColor: palette.primaryDark, color: palette.onPrimary, borderRadius: 14, overflow: 'hidden' }}
              >
                <img
                  src={hasText(project.imageUrl) ? project.imageUrl : 'https://placehold.co/720x420?text=Project'}
                  alt={project.name}
                  style={{ width: '100%', height: 180, objectFit: 'cover', display: 'block' }}
                />
                <div style={{ padding: '1.25rem 1.5rem 1.5rem' }}>
                  <p style={{ fontSize: '0.8rem', textTransform: 'uppercase', letterSpacing: '0.06em', opacity: 0.85 }}>
                    {project.technologies}
                  </p>
                  <h3 style={heading}>{project.name}</h3>
                  <p>{withBreaks(project.description)}</p>
                  {hasText(project.liveUrl) && (
                    <a href={project.liveUrl} style={{ color: palette.onPrimary, fontWeight: 600, marginRight: '1rem' }}>
                      Live ↗
                    </a>
                  )}
                  {hasText(project.repoUrl) && (
                    <a href={project.repoUrl} style={{ color: palette.onPrimary, fontWeight: 600 }}>
                      Code ↗
                    </a>
                  )}
                </div>
              </article>
            ))}
          </div>
        </section>
      )}

      {visible.skills && (
        <section id="skills" style={panel}>
          <h2 style={sectionTitle}>Skills</h2>
          <div style={{ display: 'flex', flexWrap: 'wrap', gap: '0.6rem' }}>
            {tags.map((tag) => (
              <span key={tag} style={pill}>
                {tag}
              </span>
            ))}
          </div>
        </section>
      )}

      {visible.contact && (
        <section id="connect" style={{ ...panel, textAlign: 'center' }}>
          <h2 style={sectionTitle}>Let's Connect</h2>
          {hasText(record.contactEmail) && (
            <p>
              <a href={'mailto:' + record.contactEmail} style={cta}>
                {record.contactEmail}
              </a>
            </p>
          )}
          <p>
            {hasText(record.linkedinUrl) && (
              <a href={record.linkedinUrl} style={{ margin: '0 1rem', color: palette.primary, fontWeight: 600 }}>
                LinkedIn
              </a>
            )}
            {hasText(record.githubUrl) && (
              <a href={record.githubUrl} style={{ margin: '0 1rem', color: palette.primary, fontWeight: 600 }}>
                GitHub
              </a>
            )}
            {hasText(record.instagramUrl) && (
              <a href={record.instagramUrl} style={{ margin: '0 1rem', color: palette.primary, fontWeight: 600 }}>
                Instagram
              </a>
            )}
            {visible.resume && (
              <a href={record.resumeUrl} style={{ margin: '0 1rem', color: palette.primary, fontWeight: 600 }}>
                Résumé
              </a>
            )}
          </p>
        </section>
      )}

      {showToTop && (
        <button
          type="button"
          aria-label="Back to top"
          onClick={() => window.scrollTo({ top: 0, behavior: 'smooth' })}
          style={{
            position: 'fixed',
            right: '1.5rem',
            bottom: '1.5rem',
            width: 44,
            height: 44,
            borderRadius: '50%',
            border: 'none',
            backgroundColor: palette.accent,
            color: palette.onAccent,
            fontSize: '1.2rem',
            cursor: 'pointer',
          }}
        >
          ↑
        </button>
      )}

      <footer style={{ textAlign: 'center', padding: '2.5rem', fontSize: '0.85rem', opacity: 0.8 }}>
        Crafted by {record.yourName}
      </footer>
    </div>
  );
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> PortfolioRecord {
        PortfolioRecord {
            your_name: "Grace Hopper".to_string(),
            hero_title: Some("Rear Admiral".to_string()),
            skills: Some("COBOL, Compilers".to_string()),
            show_skills_section: true,
            contact_email: "grace@navy.mil".to_string(),
            show_contact_section: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_preview_renders_pills_and_threshold_script() {
        let pair = CreativeGenerator::new().generate(&base_record()).unwrap();
        assert!(pair.preview_document.contains("class=\"pill\">COBOL</span>"));
        assert!(pair.preview_document.contains("window.scrollY > 64"));
        assert!(pair.preview_document.contains("href=\"#skills\""));
    }

    #[test]
    fn test_hero_image_falls_back_to_placeholder() {
        let pair = CreativeGenerator::new().generate(&base_record()).unwrap();
        assert!(pair
            .preview_document
            .contains("https://placehold.co/560x640?text=Portrait"));
    }

    #[test]
    fn test_color_fallbacks_applied_for_malformed_input() {
        let mut record = base_record();
        record.primary_color = Some("#nothex".to_string());
        let pair = CreativeGenerator::new().generate(&record).unwrap();
        assert!(pair.preview_document.contains("--primary: #6366F1;"));
    }

    #[test]
    fn test_exported_source_uses_react_state_for_nav() {
        let pair = CreativeGenerator::new().generate(&base_record()).unwrap();
        assert!(pair.exported_source.contains("React.useState(false)"));
        assert!(pair
            .exported_source
            .contains("export default function GraceHopperPortfolio()"));
    }
}
