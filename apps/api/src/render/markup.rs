//! Minimal HTML text escaping for rendered documents. All user-entered text
//! passes through here before being written into markup.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe interpolation into HTML
/// element bodies and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text_untouched() {
        assert_eq!(escape("Led a team of 5 – shipped v2"), "Led a team of 5 – shipped v2");
    }

    #[test]
    fn test_escape_preserves_newlines() {
        assert_eq!(escape("line one\nline two"), "line one\nline two");
    }
}
