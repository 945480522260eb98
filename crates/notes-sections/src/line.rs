//! Line classification for the decomposer.
//!
//! Recognizes the only two markdown constructs that matter here: `#` headers
//! and backtick code fences.

use std::sync::LazyLock;

use regex::Regex;

/// Fence token opening and closing a code block.
pub const FENCE: &str = "```";

/// Language given to blocks whose opening fence has no language token.
pub const DEFAULT_LANGUAGE: &str = "text";

/// One to three `#`, whitespace, then the title.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,3}\s+(.+)$").unwrap());

/// Line content without a trailing carriage return.
pub(crate) fn content(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Title of a header line, trimmed.
///
/// Levels 1 to 3 are treated alike; `####` and deeper are not headers.
pub(crate) fn header_title(line: &str) -> Option<&str> {
    let caps = HEADER_RE.captures(line)?;
    caps.get(1).map(|m| m.as_str().trim())
}

/// Language of a fence-open line.
///
/// The fence may be followed directly by a language token of ASCII
/// letters, digits and underscores; anything after the token is ignored.
/// Returns [`DEFAULT_LANGUAGE`] for a bare fence and `None` if the line is
/// not a fence at all.
pub(crate) fn fence_language(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(FENCE)?;
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();

    if len == 0 {
        Some(DEFAULT_LANGUAGE)
    } else {
        Some(&rest[..len])
    }
}

/// Check if a line closes the open code block.
///
/// Any line starting with the fence token closes, whatever follows it.
pub(crate) fn is_fence_close(line: &str) -> bool {
    line.starts_with(FENCE)
}
