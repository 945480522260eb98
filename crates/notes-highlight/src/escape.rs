/// Escape the three HTML-significant characters of `s`.
///
/// `&` becomes `&amp;`, `<` becomes `&lt;` and `>` becomes `&gt;`. Each input
/// character is visited once, so the entities inserted here are never
/// escaped a second time. Quotes pass through: code text only ever lands in
/// element content.
///
/// # Examples
///
/// ```
/// use notes_highlight::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("fn main() {}"), "fn main() {}");
    }

    #[test]
    fn test_escape_html_all_three() {
        assert_eq!(escape_html("<a & b>"), "&lt;a &amp; b&gt;");
    }

    #[test]
    fn test_escape_html_quotes_pass_through() {
        assert_eq!(escape_html(r#"echo "it's""#), r#"echo "it's""#);
    }

    #[test]
    fn test_escape_html_existing_entity_is_literal_text() {
        // Source text that happens to contain an entity is escaped like any other text
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_multibyte() {
        assert_eq!(escape_html("→ <é>"), "→ &lt;é&gt;");
    }
}
