//! Highlight engine.

use crate::escape::escape_html;
use crate::registry::Registry;
use crate::segment::{Segment, apply_rule, join};

/// Applies a [`Registry`]'s rules to code text.
///
/// Output is safe to insert as raw inner HTML of a `<code>` element. It is a
/// visual tokenization only: matched text is inserted as trusted markup.
#[derive(Clone, Copy, Debug)]
pub struct Highlighter<'r> {
    registry: &'r Registry,
}

impl<'r> Highlighter<'r> {
    /// Create a highlighter over `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Registry this highlighter reads rules from.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Escape `code` and wrap the matches of `language`'s rules in spans.
    ///
    /// Unknown languages use the fallback table. Never fails.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        let rules = self.registry.rules(language);
        let mut segments = vec![Segment::plain(escape_html(code))];

        for rule in rules {
            segments = apply_rule(segments, rule);
        }

        tracing::trace!(
            language,
            rules = rules.len(),
            segments = segments.len(),
            "Highlighted code"
        );

        join(&segments)
    }
}

impl Default for Highlighter<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

/// Highlight `code` with the built-in registry.
///
/// # Examples
///
/// ```
/// use notes_highlight::highlight;
///
/// assert_eq!(highlight("a < b", "text"), "a &lt; b");
/// ```
pub fn highlight(code: &str, language: &str) -> String {
    Highlighter::default().highlight(code, language)
}
