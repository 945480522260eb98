//! Escaping for fragment text and attribute values.

/// Escape text for use in element content or a double-quoted attribute.
///
/// Unlike code escaping, quotes are escaped too: titles, descriptions and
/// filenames also land in attributes.
pub(crate) fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"<a title="x">'&'</a>"#),
            "&lt;a title=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_attr_plain() {
        assert_eq!(escape_attr("Routing & controllers"), "Routing &amp; controllers");
    }
}
