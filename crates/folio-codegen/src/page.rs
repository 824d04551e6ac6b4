//! Standalone preview document assembly.
//!
//! The preview document is rendered into an isolated, script-sandboxed
//! frame with no access to the host page, so everything it needs (styles,
//! fonts, interaction scripts) is carried inline. Themes supply the
//! stylesheet, body fragments, and an inert interaction script; the shell
//! provides the document chrome around them.

use folio_core::escape;

use crate::plan::Palette;

/// The `:root` custom-property block every theme stylesheet opens with.
/// Interpolated palette values pass through [`escape::style_value`] so a
/// value can never break out of the declaration.
pub fn root_variables(palette: &Palette) -> String {
    format!(
        ":root {{\n  --primary: {};\n  --primary-dark: {};\n  --background: {};\n  --accent: {};\n  --foreground: {};\n  --on-primary: {};\n  --on-accent: {};\n}}\n",
        escape::style_value(Some(&palette.primary)),
        escape::style_value(Some(&palette.primary_dark)),
        escape::style_value(Some(&palette.background)),
        escape::style_value(Some(&palette.accent)),
        escape::style_value(Some(palette.foreground)),
        escape::style_value(Some(palette.on_primary)),
        escape::style_value(Some(palette.on_accent)),
    )
}

/// The pieces a theme contributes to one preview document.
pub struct PreviewShell<'a> {
    /// Document title, unescaped; the shell escapes it for markup text.
    pub title: String,
    /// Static `<link>` tags for web fonts.
    pub font_links: &'a str,
    /// Theme stylesheet. Interpolated values must already have passed
    /// through [`escape::style_value`].
    pub style: String,
    /// Body fragments, fully escaped by the theme.
    pub body: String,
    /// Inert interaction script (scroll highlighting, nav toggles). Static
    /// text only; record content never reaches this block.
    pub script: &'a str,
}

impl PreviewShell<'_> {
    /// Assemble the complete markup document.
    pub fn render(&self) -> String {
        let mut html =
            String::with_capacity(self.style.len() + self.body.len() + self.script.len() + 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\" />\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
        );
        html.push_str(&format!(
            "  <title>{}</title>\n",
            escape::markup_text(Some(&self.title))
        ));
        html.push_str(self.font_links);
        html.push_str("  <style>\n");
        html.push_str(&self.style);
        html.push_str("\n  </style>\n</head>\n<body>\n");
        html.push_str(&self.body);
        if !self.script.is_empty() {
            html.push_str("\n<script>\n");
            html.push_str(self.script);
            html.push_str("\n</script>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// An `<img>` tag with attribute-escaped source and alt text, substituting
/// `fallback` when the source is absent or blank.
pub fn img_tag(src: Option<&str>, fallback: &str, alt: &str, class: &str) -> String {
    let src = match src {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    };
    format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" />",
        class,
        escape::markup_attr(Some(src)),
        escape::markup_attr(Some(alt)),
    )
}

/// A `mailto:` href for the contact link.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", escape::markup_attr(Some(email)))
}

/// An anchor link rendered inside navigation.
pub fn nav_link(target_id: &str, label: &str, class: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"#{}\">{}</a>",
        class,
        target_id,
        escape::markup_text(Some(label)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_is_a_complete_document() {
        let shell = PreviewShell {
            title: "Ada <Lovelace>".to_string(),
            font_links: "",
            style: "body { margin: 0; }".to_string(),
            body: "<main>hello</main>".to_string(),
            script: "",
        };
        let html = shell.render();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada &lt;Lovelace&gt;</title>"));
        assert!(html.contains("<main>hello</main>"));
        assert!(html.ends_with("</html>\n"));
        // No script block when the theme has no interaction script.
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_img_tag_fallback_and_escaping() {
        let tag = img_tag(None, "https://placehold.co/600x400", "A \"quote\"", "card-img");
        assert!(tag.contains("src=\"https://placehold.co/600x400\""));
        assert!(tag.contains("alt=\"A &quot;quote&quot;\""));

        let tag = img_tag(Some("   "), "fallback.png", "x", "c");
        assert!(tag.contains("src=\"fallback.png\""));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto_href("a@b.com"), "mailto:a@b.com");
    }
}
