//! Filename captions above code fences.
//!
//! Authors announce a listing's file on the line just before its fence,
//! either with a document icon (`📄 src/main.rs`) or in bold (`**main.rs**`).

/// Icon marking a filename caption.
const FILE_ICON: char = '📄';

/// Emphasis marker pair wrapping a filename caption.
const EMPHASIS: &str = "**";

/// Infer the display filename from the line preceding a fence.
///
/// Returns `None` when the line is not a caption or nothing is left once
/// the decoration is removed.
pub(crate) fn infer_filename(previous: &str) -> Option<String> {
    if !is_caption(previous) {
        return None;
    }

    let name: String = previous
        .chars()
        .filter(|&c| c != FILE_ICON && c != '*')
        .collect();
    let name = name.trim();

    (!name.is_empty()).then(|| name.to_owned())
}

fn is_caption(line: &str) -> bool {
    line.contains(FILE_ICON) || is_emphasized(line)
}

/// Entire line wrapped in `**…**` with something in between.
fn is_emphasized(line: &str) -> bool {
    line.len() > 2 * EMPHASIS.len() && line.starts_with(EMPHASIS) && line.ends_with(EMPHASIS)
}
