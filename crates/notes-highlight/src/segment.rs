//! Tagged/untagged spans of partially highlighted text.

use crate::registry::Rule;

/// A run of highlighted output.
///
/// Tagged segments already carry their `<span>` wrapper and are opaque to
/// later rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Segment {
    text: String,
    tagged: bool,
}

impl Segment {
    /// Untagged text, still open to matching.
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tagged: false,
        }
    }

    /// Matched text wrapped in a span with `class`.
    fn tagged(matched: &str, class: &str) -> Self {
        Self {
            text: format!(r#"<span class="{class}">{matched}</span>"#),
            tagged: true,
        }
    }
}

/// Entities the escaper produces.
const ENTITIES: [&str; 3] = ["&amp;", "&lt;", "&gt;"];

/// Whether byte offset `pos` falls strictly inside an entity of `text`.
fn splits_entity(text: &str, pos: usize) -> bool {
    let Some(start) = text[..pos].rfind('&') else {
        return false;
    };
    ENTITIES
        .iter()
        .any(|entity| pos < start + entity.len() && text[start..].starts_with(entity))
}

/// Split every untagged segment around the non-overlapping matches of `rule`.
///
/// Relative order is preserved and tagged segments are copied through.
/// Matches that would cut an entity in two are left untagged.
pub(crate) fn apply_rule(segments: Vec<Segment>, rule: &Rule) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        if segment.tagged {
            out.push(segment);
            continue;
        }

        let mut last = 0;
        for m in rule.pattern().find_iter(&segment.text) {
            if m.is_empty()
                || splits_entity(&segment.text, m.start())
                || splits_entity(&segment.text, m.end())
            {
                continue;
            }
            if m.start() > last {
                out.push(Segment::plain(&segment.text[last..m.start()]));
            }
            out.push(Segment::tagged(m.as_str(), rule.class()));
            last = m.end();
        }

        if last == 0 {
            // No match: keep the segment as is
            out.push(segment);
        } else if last < segment.text.len() {
            out.push(Segment::plain(&segment.text[last..]));
        }
    }

    out
}

/// Concatenate segments into the final markup.
pub(crate) fn join(segments: &[Segment]) -> String {
    let len = segments.iter().map(|s| s.text.len()).sum();
    let mut out = String::with_capacity(len);
    for segment in segments {
        out.push_str(&segment.text);
    }
    out
}
