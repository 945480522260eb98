//! Section and code block types.

/// Prefix of every section id; the rest is the 1-based section number.
pub const SECTION_ID_PREFIX: &str = "section-";

/// A titled part of a document, opened by a header line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Anchor id, `section-N`.
    pub id: String,
    /// Header text, trimmed.
    pub title: String,
    /// First prose line under the header, trimmed.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Code blocks in the order they were closed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks: Vec<CodeBlock>,
}

impl Section {
    /// Create an empty section with the id for `number`.
    pub fn new(number: usize, title: impl Into<String>) -> Self {
        Self {
            id: format!("{SECTION_ID_PREFIX}{number}"),
            title: title.into(),
            description: None,
            blocks: Vec::new(),
        }
    }

    /// Section number encoded in the id.
    ///
    /// ```
    /// use notes_sections::Section;
    ///
    /// assert_eq!(Section::new(3, "Routing").number(), Some(3));
    /// ```
    pub fn number(&self) -> Option<usize> {
        self.id.strip_prefix(SECTION_ID_PREFIX)?.parse().ok()
    }
}

/// A fenced code listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
    /// Language token from the opening fence, `text` when absent.
    pub language: String,
    /// Lines between the fences joined with `\n`.
    pub code: String,
    /// Display filename taken from the caption line above the fence.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub filename: Option<String>,
}
