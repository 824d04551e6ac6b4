//! The Playful theme, aimed at students: two fixed academic milestone
//! slots with alternating image/text sides, an auto-scrolling affiliations
//! marquee built from the skill tags, work history as fixed two-slot
//! cards, and a collapsible off-canvas mobile navigation.

use folio_core::errors::Result;
use folio_core::escape;
use folio_core::record::{AcademicEntry, PortfolioRecord, Theme};

use crate::export;
use crate::page::{img_tag, mailto_href, nav_link, root_variables, PreviewShell};
use crate::plan::{component_ident, Palette, SectionPlan};

use super::{require_identity, GeneratedPair, ThemeGenerator};

const FONT_LINKS: &str = concat!(
    "  <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\" />\n",
    "  <link href=\"https://fonts.googleapis.com/css2?family=Baloo+2:wght@500;700&family=Nunito:wght@400;600&display=swap\" rel=\"stylesheet\" />\n",
);

const MILESTONE_IMAGE_FALLBACK: &str = "https://placehold.co/520x360?text=Milestone";
const WORK_IMAGE_FALLBACK: &str = "https://placehold.co/600x360?text=Work";

/// How many academic milestone slots and work cards the layout carries.
const MILESTONE_SLOTS: usize = 2;

/// Off-canvas drawer wiring. Static text; no record content.
const DRAWER_SCRIPT: &str = r#"(function () {
  var toggle = document.querySelector('.nav-toggle');
  var drawer = document.querySelector('.drawer');
  var overlay = document.querySelector('.drawer-overlay');
  function setOpen(open) {
    if (drawer) drawer.classList.toggle('open', open);
    if (overlay) overlay.classList.toggle('open', open);
    if (toggle) toggle.setAttribute('aria-expanded', String(open));
  }
  if (toggle) {
    toggle.addEventListener('click', function () {
      setOpen(!(drawer && drawer.classList.contains('open')));
    });
  }
  if (overlay) {
    overlay.addEventListener('click', function () { setOpen(false); });
  }
  Array.prototype.forEach.call(document.querySelectorAll('.drawer a'), function (link) {
    link.addEventListener('click', function () { setOpen(false); });
  });
})();"#;

const BASE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; font-family: 'Nunito', system-ui, sans-serif; line-height: 1.6; }
h1, h2, h3 { font-family: 'Baloo 2', system-ui, sans-serif; margin: 0 0 0.5rem; }
.page { background-color: var(--background); color: var(--foreground); min-height: 100vh; overflow-x: hidden; }
.topbar { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; }
.topbar .wordmark { font-family: 'Baloo 2', sans-serif; font-size: 1.3rem; font-weight: 700; color: var(--primary); }
.topbar nav.desktop a { margin-left: 1.25rem; text-decoration: none; font-weight: 600; color: var(--foreground); }
.nav-toggle { display: none; border: 2px solid var(--primary); background: none; color: var(--primary); font-size: 1.2rem; border-radius: 8px; padding: 0.25rem 0.6rem; cursor: pointer; }
.drawer { position: fixed; top: 0; right: -240px; width: 240px; height: 100vh; background-color: var(--primary); padding: 4rem 1.5rem; transition: right 0.3s ease; z-index: 40; }
.drawer.open { right: 0; }
.drawer a { display: block; margin-bottom: 1.25rem; color: var(--on-primary); font-weight: 700; text-decoration: none; font-size: 1.1rem; }
.drawer-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); opacity: 0; pointer-events: none; transition: opacity 0.3s ease; z-index: 30; }
.drawer-overlay.open { opacity: 1; pointer-events: auto; }
.hero { text-align: center; padding: 4rem 1.5rem 3rem; }
.hero h1 { font-size: 3rem; color: var(--primary); }
.hero .title { font-size: 1.3rem; font-weight: 600; margin: 0.25rem 0; }
.hero .tagline { max-width: 36rem; margin: 0.75rem auto 1.5rem; }
.hero img { width: 180px; height: 180px; object-fit: cover; border-radius: 30% 70% 70% 30% / 30% 30% 70% 70%; border: 5px solid var(--accent); margin-bottom: 1.25rem; }
.hero .cta { display: inline-block; padding: 0.75rem 1.9rem; background-color: var(--accent); color: var(--on-accent); font-weight: 700; text-decoration: none; border-radius: 14px; box-shadow: 0 4px 0 var(--primary-dark); }
section.chunk { max-width: 60rem; margin: 0 auto; padding: 3rem 1.5rem; }
section.chunk > h2 { font-size: 2rem; color: var(--primary); }
.bubble { position: relative; margin-top: 1.5rem; padding: 1.25rem 1.5rem; background-color: var(--accent); color: var(--on-accent); border-radius: 18px; font-weight: 600; }
.milestone { display: flex; align-items: center; gap: 2rem; margin-top: 2.5rem; }
.milestone:nth-of-type(even) { flex-direction: row-reverse; }
.milestone img { width: 260px; height: 180px; object-fit: cover; border-radius: 18px; }
.milestone .year { color: var(--accent); font-weight: 700; }
.marquee { overflow: hidden; background-color: var(--primary-dark); padding: 1rem 0; }
.marquee-track { display: inline-flex; gap: 1rem; white-space: nowrap; animation: marquee-scroll 18s linear infinite; }
.marquee .tag { padding: 0.4rem 1.2rem; background-color: var(--primary); color: var(--on-primary); border-radius: 999px; font-weight: 700; }
@keyframes marquee-scroll { from { transform: translateX(0); } to { transform: translateX(-50%); } }
.work-row { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 2rem; }
.work-card { background-color: var(--primary); color: var(--on-primary); border-radius: 18px; overflow: hidden; box-shadow: 0 6px 0 var(--primary-dark); }
.work-card img { width: 100%; height: 170px; object-fit: cover; display: block; }
.work-card .card-body { padding: 1.25rem 1.5rem 1.5rem; }
.work-card .tech { font-size: 0.85rem; opacity: 0.9; }
.work-card a { color: var(--on-primary); font-weight: 700; margin-right: 1rem; }
.contact-card { text-align: center; background-color: var(--primary-dark); color: var(--on-primary); border-radius: 24px; padding: 2.5rem 1.5rem; }
.contact-card a { color: var(--on-primary); font-weight: 700; margin: 0 0.75rem; }
.site-footer { text-align: center; padding: 2rem; font-weight: 600; }
@media (max-width: 700px) {
  .topbar nav.desktop { display: none; }
  .nav-toggle { display: inline-block; }
  .milestone, .milestone:nth-of-type(even) { flex-direction: column; }
  .work-row { grid-template-columns: 1fr; }
}"#;

/// Playful theme generator.
#[derive(Debug, Default)]
pub struct PlayfulGenerator;

impl PlayfulGenerator {
    pub fn new() -> Self {
        Self
    }

    fn stylesheet(palette: &Palette) -> String {
        let mut css = root_variables(palette);
        css.push_str(BASE_CSS);
        css
    }

    fn nav_items(plan: &SectionPlan) -> Vec<(&'static str, &'static str)> {
        let mut items = Vec::new();
        if plan.about {
            items.push(("about", "About"));
        }
        if plan.show_academic() {
            items.push(("journey", "My Journey"));
        }
        if plan.show_skills() {
            items.push(("affiliations", "Affiliations"));
        }
        if plan.show_experience() {
            items.push(("work", "Work"));
        }
        if plan.contact {
            items.push(("hello", "Say Hi"));
        }
        items
    }

    fn topbar(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let items = Self::nav_items(plan);
        let mut desktop = String::new();
        let mut drawer = String::new();
        for (id, label) in &items {
            desktop.push_str(&nav_link(id, label, "nav-item"));
            drawer.push_str(&nav_link(id, label, "drawer-item"));
        }
        let mut html = format!(
            "<header class=\"topbar\"><span class=\"wordmark\">{}</span><nav class=\"desktop\">{}</nav><button class=\"nav-toggle\" type=\"button\" aria-expanded=\"false\" aria-label=\"Open navigation\">☰</button></header>\n",
            escape::markup_text(Some(&record.your_name)),
            desktop,
        );
        html.push_str(&format!(
            "<aside class=\"drawer\">{}</aside>\n<div class=\"drawer-overlay\"></div>\n",
            drawer,
        ));
        html
    }

    fn hero(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from("<section class=\"hero\" id=\"top\">\n  ");
        html.push_str(&img_tag(
            record.hero_image_url.as_deref(),
            "https://placehold.co/360x360?text=Hi!",
            &record.your_name,
            "hero-img",
        ));
        html.push('\n');
        html.push_str(&format!(
            "  <h1>Hi, I&#39;m {}!</h1>\n",
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
            let label = record.hero_cta_text.as_deref().unwrap_or("Say Hi!");
            html.push_str(&format!(
                "  <a class=\"cta\" href=\"#hello\">{}</a>\n",
                escape::markup_text(Some(label))
            ));
        }
        html.push_str("</section>\n");
        html
    }

    fn about(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"chunk\" id=\"about\">\n  <h2>About Me</h2>\n");
        html.push_str(&format!(
            "  <p>{}</p>\n",
            escape::markup_text_with_breaks(record.about_me.as_deref())
        ));
        if plan.fun_fact {
            html.push_str(&format!(
                "  <div class=\"bubble\">✨ {}</div>\n",
                escape::markup_text(record.fun_fact.as_deref())
            ));
        }
        html.push_str("</section>\n");
        html
    }

    fn milestone(entry: &AcademicEntry) -> String {
        let mut html = String::from("  <div class=\"milestone\">\n    ");
        html.push_str(&img_tag(
            entry.image_url.as_deref(),
            MILESTONE_IMAGE_FALLBACK,
            &entry.institution,
            "milestone-img",
        ));
        html.push_str("\n    <div>\n");
        html.push_str(&format!(
            "      <h3>{}</h3>\n",
            escape::markup_text(Some(&entry.qualification))
        ));
        html.push_str(&format!(
            "      <p>{} &middot; <span class=\"year\">{}</span></p>\n",
            escape::markup_text(Some(&entry.institution)),
            escape::markup_text(Some(&entry.graduation_year)),
        ));
        if let Some(grades) = entry.grades.as_deref().filter(|v| !v.trim().is_empty()) {
            html.push_str(&format!(
                "      <p>{}</p>\n",
                escape::markup_text(Some(grades))
            ));
        }
        if let Some(description) = entry.description.as_deref().filter(|v| !v.trim().is_empty()) {
            html.push_str(&format!(
                "      <p>{}</p>\n",
                escape::markup_text_with_breaks(Some(description))
            ));
        }
        html.push_str("    </div>\n  </div>\n");
        html
    }

    /// Two fixed milestone slots; image/text sides alternate via CSS.
    fn journey(plan: &SectionPlan) -> String {
        let mut html =
            String::from("<section class=\"chunk\" id=\"journey\">\n  <h2>My Journey</h2>\n");
        for entry in plan.academic.iter().take(MILESTONE_SLOTS) {
            html.push_str(&Self::milestone(entry));
        }
        html.push_str("</section>\n");
        html
    }

    /// The marquee duplicates the tag list end-to-end; scrolling half the
    /// track width then restarting reads as a seamless loop.
    fn affiliations(plan: &SectionPlan) -> String {
        let mut tags = String::new();
        for tag in &plan.skills {
            tags.push_str(&format!(
                "<span class=\"tag\">{}</span>",
                escape::markup_text(Some(tag))
            ));
        }
        let mut duplicate = String::new();
        for tag in &plan.skills {
            duplicate.push_str(&format!(
                "<span class=\"tag\" aria-hidden=\"true\">{}</span>",
                escape::markup_text(Some(tag))
            ));
        }
        format!(
            "<section id=\"affiliations\">\n  <div class=\"marquee\">\n    <div class=\"marquee-track\">{}{}</div>\n  </div>\n</section>\n",
            tags, duplicate,
        )
    }

    fn work(plan: &SectionPlan) -> String {
        let mut html = String::from(
            "<section class=\"chunk\" id=\"work\">\n  <h2>Work History</h2>\n  <div class=\"work-row\">\n",
        );
        for project in &plan.experience {
            html.push_str("    <article class=\"work-card\">\n      ");
            html.push_str(&img_tag(
                project.image_url.as_deref(),
                WORK_IMAGE_FALLBACK,
                &project.name,
                "work-img",
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
            if let Some(url) = project.live_url.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "        <a href=\"{}\">Check it out</a>\n",
                    escape::markup_attr(Some(url))
                ));
            }
            if let Some(url) = project.repo_url.as_deref().filter(|v| !v.trim().is_empty()) {
                html.push_str(&format!(
                    "        <a href=\"{}\">Code</a>\n",
                    escape::markup_attr(Some(url))
                ));
            }
            html.push_str("      </div>\n    </article>\n");
        }
        html.push_str("  </div>\n</section>\n");
        html
    }

    fn hello(record: &PortfolioRecord, plan: &SectionPlan) -> String {
        let mut html = String::from(
            "<section class=\"chunk\" id=\"hello\">\n  <div class=\"contact-card\">\n    <h2>Say Hi!</h2>\n",
        );
        if !record.contact_email.trim().is_empty() {
            html.push_str(&format!(
                "    <p><a href=\"{}\">{}</a></p>\n",
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
                "<a href=\"{}\">My Résumé</a>",
                escape::markup_attr(record.resume_url.as_deref()),
            ));
        }
        if !links.is_empty() {
            html.push_str(&format!("    <p>{}</p>\n", links));
        }
        html.push_str("  </div>\n</section>\n");
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
            body.push_str(&Self::journey(plan));
        }
        if plan.show_skills() {
            body.push_str(&Self::affiliations(plan));
        }
        if plan.show_experience() {
            body.push_str(&Self::work(plan));
        }
        if plan.contact {
            body.push_str(&Self::hello(record, plan));
        }
        body.push_str(&format!(
            "<footer class=\"site-footer\">Made with ♥ by {}</footer>\n",
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

impl ThemeGenerator for PlayfulGenerator {
    fn theme(&self) -> Theme {
        Theme::Playful
    }

    fn generate(&self, record: &PortfolioRecord) -> Result<GeneratedPair> {
        require_identity(record)?;
        let plan = SectionPlan::for_record(record);
        let palette = Palette::derive(record);

        let preview_document = PreviewShell {
            title: format!("{} · Hello!", record.your_name),
            font_links: FONT_LINKS,
            style: Self::stylesheet(&palette),
            body: Self::body(record, &plan, &palette),
            script: DRAWER_SCRIPT,
        }
        .render();

        let component_name = component_ident(&record.your_name);
        let exported_source = export::assemble(
            Theme::Playful,
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

/// Component body for the exported source. The drawer is React state; the
/// marquee keeps the duplicated-track trick with an inline keyframes tag.
const COMPONENT_BODY: &str = r##"  const record = loadRecord();
  const palette = derivePalette(record);
  const visible = sectionVisibility(record);
  const workEntries = renderableProjects(record).slice(0, 2);
  const milestones = renderableAcademicEntries(record).slice(0, 2);
  const tags = skillTags(record);
  const [drawerOpen, setDrawerOpen] = React.useState(false);

  const navItems = [
    visible.about && { href: '#about', label: 'About' },
    visible.academic && { href: '#journey', label: 'My Journey' },
    visible.skills && { href: '#affiliations', label: 'Affiliations' },
    visible.experience && { href: '#work', label: 'Work' },
    visible.contact && { href: '#hello', label: 'Say Hi' },
  ].filter(Boolean);

  const display = { fontFamily: "'Baloo 2', system-ui, sans-serif" };
  const chunk = { maxWidth: '60rem', margin: '0 auto', padding: '3rem 1.5rem' };
  const sectionTitle = { ...display, fontSize: '2rem', color: palette.primary, margin: '0 0 0.5rem' };
  const marqueeTrack = tags.concat(tags);

  return (
    <div
      style={{
        backgroundColor: palette.background,
        color: palette.foreground,
        fontFamily: "'Nunito', system-ui, sans-serif",
        minHeight: '100vh',
        overflowX: 'hidden',
      }}
    >
      <style>
        {'@keyframes marquee-scroll { from { transform: translateX(0); } to { transform: translateX(-50%); } }'}
      </style>

      <header style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center', padding: '1rem 1.5rem' }}>
        <span style={{ ...display, fontSize: '1.3rem', fontWeight: 700, color: palette.primary }}>
          {record.yourName}
        </span>
        <nav>
          {navItems.map((item) => (
            <a
              key={item.href}
              href={item.href}
              style={{ marginLeft: '1.25rem', textDecoration: 'none', fontWeight: 600, color: palette.foreground }}
            >
              {item.label}
            </a>
          ))}
        </nav>
        <button
          type="button"
          aria-expanded={drawerOpen}
          aria-label="Open navigation"
          onClick={() => setDrawerOpen(!drawerOpen)}
          style={{
            border: '2px solid ' + palette.primary,
            background: 'none',
            color: palette.primary,
            fontSize: '1.2rem',
            borderRadius: 8,
            padding: '0.25rem 0.6rem',
            cursor: 'pointer',
          }}
        >
          ☰
        </button>
      </header>

      <aside
        style={{
          position: 'fixed',
          top: 0,
          right: drawerOpen ? 0 : -240,
          width: 240,
          height: '100vh',
          backgroundColor: palette.primary,
          padding: '4rem 1.5rem',
          transition: 'right 0.3s ease',
          zIndex: 40,
        }}
      >
        {navItems.map((item) => (
          <a
            key={item.href}
            href={item.href}
            onClick={() => setDrawerOpen(false)}
            style={{
              display: 'block',
              marginBottom: '1.25rem',
              color: palette.onPrimary,
              fontWeight: 700,
              textDecoration: 'none',
              fontSize: '1.1rem',
            }}
          >
            {item.label}
          </a>
        ))}
      </aside>
      {drawerOpen && (
        <div
          onClick={() => setDrawerOpen(false)}
          style={{ position: 'fixed', inset: 0, background: 'rgba(0, 0, 0, 0.4)', zIndex: 30 }}
        />
      )}

      <section id="top" style={{ textAlign: 'center', padding: '4rem 1.5rem 3rem' }}>
        <img
          src={hasText(record.heroImageUrl) ? record.heroImageUrl : 'https://placehold.co/360x360?text=Hi!'}
          alt={record.yourName}
          style={{
            width: 180,
            height: 180,
            objectFit: 'cover',
            borderRadius: '30% 70% 70% 30% / 30% 30% 70% 70%',
            border: '5px solid ' + palette.accent,
            marginBottom: '1.25rem',
          }}
        />
        <h1 style={{ ...display, fontSize: '3rem', color: palette.primary, margin: 0 }}>
          Hi, I'm {record.yourName}!
        </h1>
        {hasText(record.heroTitle) && (
          <p style={{ fontSize: '1.3rem', fontWeight: 600, margin: '0.25rem 0' }}>{record.heroTitle}</p>
        )}
        {hasText(record.heroTagline) && (
          <p style={{ maxWidth: '36rem', margin: '0.75rem auto 1.5rem' }}>{withBreaks(record.heroTagline)}</p>
        )}
        {visible.contact && (
          <a
            href="#hello"
            style={{
              display: 'inline-block',
              padding: '0.75rem 1.9rem',
              backgroundColor: palette.accent,
              color: palette.onAccent,
              fontWeight: 700,
              textDecoration: 'none',
              borderRadius: 14,
            }}
          >
            {hasText(record.heroCtaText) ? record.heroCtaText : 'Say Hi!'}
          </a>
        )}
      </section>

      {visible.about && (
        <section id="about" style={chunk}>
          <h2 style={sectionTitle}>About Me</h2>
          <p>{withBreaks(record.aboutMe)}</p>
          {visible.funFact && (
            <div
              style={{
                marginTop: '1.5rem',
                padding: '1.25rem 1.5rem',
                backgroundColor: palette.accent,
                color: palette.onAccent,
                borderRadius: 18,
                fontWeight: 600,
              }}
            >
              ✨ {record.funFact}
            </div>
          )}
        </section>
      )}

      {visible.academic && (
        <section id="journey" style={chunk}>
          <h2 style={sectionTitle}>My Journey</h2>
          {milestones.map((entry, index) => (
            <div
              key={index}
              style={{
                display: 'flex',
                alignItems: 'center',
                gap: '2rem',
                marginTop: '2.5rem',
                flexDirection: index % 2 === 1 ? 'row-reverse' : 'row',
              }}
            >
              <img
                src={hasText(entry.imageUrl) ? entry.imageUrl : 'https://placehold.co/520x360?text=Milestone'}
                alt={entry.institution}
                style={{ width: 260, height: 180, objectFit: 'cover', borderRadius: 18 }}
              />
              <div>
                <h3 style={display}>{entry.qualification}</h3>
                <p>
                  {entry.institution} · <span style={{ color: palette.accent, fontWeight: 700 }}>{entry.graduationYear}</span>
                </p>
                {hasText(entry.grades) && <p>{entry.grades}</p>}
                {hasText(entry.description) && <p>{withBreaks(entry.description)}</p>}
              </div>
            </div>
          ))}
        </section>
      )}

      {visible.skills && (
        <section id="affiliations">
          <div style={{ overflow: 'hidden', backgroundColor: palette.primaryDark, padding: '1rem 0' }}>
            <div
              style={{
                display: 'inline-flex',
                gap: '1rem',
                whiteSpace: 'nowrap',
                animation: 'marquee-scroll 18s linear infinite',
              }}
            >
              {marqueeTrack.map((tag, index) => (
                <span
                  key={index}
                  aria-hidden={index >= tags.length}
                  style={{
                    padding: '0.4rem 1.2rem',
                    backgroundColor: palette.primary,
                    color: palette.onPrimary,
                    borderRadius: 999,
                    fontWeight: 700,
                  }}
                >
                  {tag}
                </span>
              ))}
            </div>
          </div>
        </section>
      )}

      {visible.experience && (
        <section id="work" style={chunk}>
          <h2 style={sectionTitle}>Work History</h2>
          <div style={{ display: 'grid', gridTemplateColumns: '1fr 1fr', gap: '2rem', marginTop: '2rem' }}>
            {workEntries.map((project, index) => (
              <article
                key={index}
                style={{ backgroundColor: palette.primary, color: palette.onPrimary, borderRadius: 18, overflow: 'hidden' }}
              >
                <img
                  src={hasText(project.imageUrl) ? project.imageUrl : 'https://placehold.co/600x360?text=Work'}
                  alt={project.name}
                  style={{ width: '100%', height: 170, objectFit: 'cover', display: 'block' }}
                />
                <div style={{ padding: '1.25rem 1.5rem 1.5rem' }}>
                  <h3 style={display}>{project.name}</h3>
                  <p style={{ fontSize: '0.85rem', opacity: 0.9 }}>{project.technologies}</p>
                  <p>{withBreaks(project.description)}</p>
                  {hasText(project.liveUrl) && (
                    <a href={project.liveUrl} style={{ color: palette.onPrimary, fontWeight: 700, marginRight: '1rem' }}>
                      Check it out
                    </a>
                  )}
                  {hasText(project.repoUrl) && (
                    <a href={project.repoUrl} style={{ color: palette.onPrimary, fontWeight: 700 }}>
                      Code
                    </a>
                  )}
                </div>
              </article>
            ))}
          </div>
        </section>
      )}

      {visible.contact && (
        <section id="hello" style={chunk}>
          <div
            style={{
              textAlign: 'center',
              backgroundColor: palette.primaryDark,
              color: palette.onPrimary,
              borderRadius: 24,
              padding: '2.5rem 1.5rem',
            }}
          >
            <h2 style={{ ...display, fontSize: '2rem', margin: '0 0 0.5rem' }}>Say Hi!</h2>
            {hasText(record.contactEmail) && (
              <p>
                <a href={'mailto:' + record.contactEmail} style={{ color: palette.onPrimary, fontWeight: 700 }}>
                  {record.contactEmail}
                </a>
              </p>
            )}
            <p>
              {hasText(record.linkedinUrl) && (
                <a href={record.linkedinUrl} style={{ color: palette.onPrimary, fontWeight: 700, margin: '0 0.75rem' }}>
                  LinkedIn
                </a>
              )}
              {hasText(record.githubUrl) && (
                <a href={record.githubUrl} style={{ color: palette.onPrimary, fontWeight: 700, margin: '0 0.75rem' }}>
                  GitHub
                </a>
              )}
              {hasText(record.instagramUrl) && (
                <a href={record.instagramUrl} style={{ color: palette.onPrimary, fontWeight: 700, margin: '0 0.75rem' }}>
                  Instagram
                </a>
              )}
              {visible.resume && (
                <a href={record.resumeUrl} style={{ color: palette.onPrimary, fontWeight: 700, margin: '0 0.75rem' }}>
                  My Résumé
                </a>
              )}
            </p>
          </div>
        </section>
      )}

      <footer style={{ textAlign: 'center', padding: '2rem', fontWeight: 600 }}>
        Made with ♥ by {record.yourName}
      </footer>
    </div>
  );
}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::record::ProjectEntry;

    fn project(name: &str) -> ProjectEntry {
        ProjectEntry {
            name: name.to_string(),
            description: "Built a thing.".to_string(),
            technologies: "Rust".to_string(),
            ..Default::default()
        }
    }

    fn base_record() -> PortfolioRecord {
        PortfolioRecord {
            your_name: "Mina".to_string(),
            skills: Some("Robotics Club, Chess Team, Debate".to_string()),
            show_skills_section: true,
            contact_email: "mina@school.edu".to_string(),
            show_contact_section: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_marquee_duplicates_tags_for_seamless_loop() {
        let pair = PlayfulGenerator::new().generate(&base_record()).unwrap();
        let marquee_start = pair.preview_document.find("marquee-track").unwrap();
        let track = &pair.preview_document[marquee_start..];
        let count = track.matches(">Robotics Club</span>").count();
        assert_eq!(count, 2);
        assert!(track.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn test_work_history_is_capped_at_two_slots() {
        let mut record = base_record();
        record.show_experience_section = true;
        record.projects = vec![project("One"), project("Two"), project("Three")];
        let pair = PlayfulGenerator::new().generate(&record).unwrap();
        assert!(pair.preview_document.contains("Work History"));
        assert!(pair.preview_document.contains(">One</h3>"));
        assert!(pair.preview_document.contains(">Two</h3>"));
        assert!(!pair.preview_document.contains(">Three</h3>"));
    }

    #[test]
    fn test_journey_uses_two_fixed_slots() {
        let mut record = base_record();
        record.show_academic_section = true;
        for index in 0..4 {
            record.academic_entries.push(AcademicEntry {
                qualification: format!("Milestone {index}"),
                institution: "School".to_string(),
                graduation_year: "2024".to_string(),
                ..Default::default()
            });
        }
        let pair = PlayfulGenerator::new().generate(&record).unwrap();
        assert!(pair.preview_document.contains("Milestone 0"));
        assert!(pair.preview_document.contains("Milestone 1"));
        assert!(!pair.preview_document.contains("Milestone 2"));
    }

    #[test]
    fn test_drawer_markup_and_script_present() {
        let pair = PlayfulGenerator::new().generate(&base_record()).unwrap();
        assert!(pair.preview_document.contains("class=\"drawer\""));
        assert!(pair.preview_document.contains("class=\"nav-toggle\""));
        assert!(pair.preview_document.contains("drawer-overlay"));
        assert!(pair.preview_document.contains("setOpen"));
    }

    #[test]
    fn test_exported_source_drives_drawer_with_state() {
        let pair = PlayfulGenerator::new().generate(&base_record()).unwrap();
        assert!(pair.exported_source.contains("const [drawerOpen, setDrawerOpen]"));
        assert!(pair.exported_source.contains("marquee-scroll"));
    }
}
