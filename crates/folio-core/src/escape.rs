//! String escaping for the four embedding contexts used by the generators.
//!
//! Every interpolated value must pass through the escaper matching its
//! destination context: element text, quoted attribute values, embedded
//! script string literals, or style-sheet declaration values. A value reused
//! in more than one context is escaped independently for each. All four
//! functions accept an absent value and return an empty string for it.

/// Escape a value for a single-quoted or backtick-quoted JS string literal.
///
/// Backslashes are handled before the characters the other rules introduce,
/// and newlines become the two-character sequence `\n` so the literal stays
/// on one line. Carriage returns are dropped.
pub fn script_string(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for element text content.
pub fn markup_text(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a double-quoted attribute value.
///
/// Lighter-weight than [`markup_text`]: attribute values here are URLs and
/// identifiers already constrained by upstream validation, so only the
/// quote-breaking characters are rewritten.
pub fn markup_attr(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a style-sheet declaration value.
///
/// Angle brackets are stripped so a value can never close the enclosing
/// `<style>` block; backslashes and double quotes are escaped to keep the
/// declaration intact; backticks are replaced with a straight quote.
pub fn style_value(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' | '>' => {}
            '`' => out.push('\''),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for element text and render embedded newlines as `<br />`.
///
/// Escaping runs first; the break elements are inserted afterwards so they
/// are never themselves escaped.
pub fn markup_text_with_breaks(value: Option<&str>) -> String {
    markup_text(value)
        .replace("\r\n", "\n")
        .replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_empty() {
        assert_eq!(script_string(None), "");
        assert_eq!(markup_text(None), "");
        assert_eq!(markup_attr(None), "");
        assert_eq!(style_value(None), "");
        assert_eq!(markup_text_with_breaks(None), "");
    }

    #[test]
    fn test_script_string_escapes() {
        assert_eq!(script_string(Some("a\\b")), "a\\\\b");
        assert_eq!(script_string(Some("a`b")), "a\\`b");
        assert_eq!(script_string(Some("a\"b")), "a\\\"b");
        assert_eq!(script_string(Some("a\nb")), "a\\nb");
        assert_eq!(script_string(Some("a\r\nb")), "a\\nb");
    }

    #[test]
    fn test_script_string_backslash_before_later_rules() {
        // A literal backslash followed by n must not collapse into a newline
        // escape: each character is rewritten exactly once.
        assert_eq!(script_string(Some("\\n")), "\\\\n");
        assert_eq!(script_string(Some("\\`")), "\\\\\\`");
    }

    #[test]
    fn test_markup_text_escapes() {
        assert_eq!(
            markup_text(Some("&<>\"'`")),
            "&amp;&lt;&gt;&quot;&#39;&#96;"
        );
    }

    #[test]
    fn test_markup_text_double_escapes_existing_references() {
        // Escaping is not idempotent: pre-escaped input is escaped again.
        assert_eq!(markup_text(Some("&amp;")), "&amp;amp;");
    }

    #[test]
    fn test_markup_text_round_trip() {
        // Unescaping the escaped form recovers the original text, which is
        // what a document-fragment parser does with the text node.
        let original = "a & b < c > d \" e ' f ` g\n";
        let escaped = markup_text(Some(original));
        let unescaped = escaped
            .replace("&#96;", "`")
            .replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .replace("&amp;", "&");
        assert_eq!(unescaped, original);
    }

    #[test]
    fn test_markup_attr_is_minimal() {
        assert_eq!(markup_attr(Some("https://a.b/?q=1&x=2")), "https://a.b/?q=1&x=2");
        assert_eq!(markup_attr(Some("a\"b`c")), "a&quot;b&#96;c");
    }

    #[test]
    fn test_style_value_strips_angle_brackets() {
        assert_eq!(style_value(Some("</style><script>")), "/stylescript");
        assert_eq!(style_value(Some("a\\b\"c`d")), "a\\\\b\\\"c'd");
    }

    #[test]
    fn test_breaks_inserted_after_escaping() {
        assert_eq!(markup_text_with_breaks(Some("a\nb")), "a<br />b");
        // The break element itself must survive; a literal "<br />" in the
        // input is escaped like any other text.
        assert_eq!(
            markup_text_with_breaks(Some("<br />")),
            "&lt;br /&gt;"
        );
    }
}
