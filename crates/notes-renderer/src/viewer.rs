//! Code viewer fragment.

use std::fmt::Write;

use notes_highlight::Highlighter;
use notes_sections::{CodeBlock, SECTION_ID_PREFIX, Section, decompose};

use crate::html::escape_attr;

/// Icon shown before a code block's filename.
const FILE_ICON: &str = "📄";

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Code viewer HTML fragment.
    pub html: String,
    /// Sections the fragment was rendered from.
    pub sections: Vec<Section>,
}

/// Labels and switches for the fragment.
#[derive(Clone, Debug)]
pub struct ViewerOptions {
    /// Whether to render the quick navigation bar.
    pub show_navigation: bool,
    /// Heading of the quick navigation bar.
    pub navigation_title: String,
    /// Label of the copy button.
    pub copy_label: String,
    /// Label the copy button switches to once clicked.
    pub copied_label: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            show_navigation: true,
            navigation_title: "Quick navigation".to_owned(),
            copy_label: "Copy".to_owned(),
            copied_label: "Copied!".to_owned(),
        }
    }
}

/// Renders sections into the code viewer HTML fragment.
pub struct CodeViewer<'r> {
    highlighter: Highlighter<'r>,
    options: ViewerOptions,
}

impl<'r> CodeViewer<'r> {
    /// Create a viewer with default labels.
    #[must_use]
    pub fn new(highlighter: Highlighter<'r>) -> Self {
        Self {
            highlighter,
            options: ViewerOptions::default(),
        }
    }

    /// Replace the labels and switches.
    #[must_use]
    pub fn with_options(mut self, options: ViewerOptions) -> Self {
        self.options = options;
        self
    }

    /// Decompose `text` and render the resulting sections.
    pub fn render_document(&self, text: &str) -> RenderResult {
        let sections = decompose(text);
        let html = self.render(&sections);
        RenderResult { html, sections }
    }

    /// Render `sections` in order.
    ///
    /// An empty slice still yields the (empty) viewer container so the page
    /// can show its own empty state inside it.
    pub fn render(&self, sections: &[Section]) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(r#"<div class="notes-viewer">"#);

        if self.options.show_navigation {
            self.navigation(sections, &mut out);
        }
        for section in sections {
            self.section(section, &mut out);
        }

        out.push_str("</div>");

        tracing::debug!(
            sections = sections.len(),
            bytes = out.len(),
            "Rendered code viewer"
        );
        out
    }

    fn navigation(&self, sections: &[Section], out: &mut String) {
        write!(
            out,
            r#"<nav class="notes-nav"><h3 class="notes-nav-title">{}</h3><div class="notes-nav-links">"#,
            escape_attr(&self.options.navigation_title)
        )
        .unwrap();

        for section in sections {
            write!(
                out,
                r##"<a href="#{}" class="notes-nav-link">{}</a>"##,
                escape_attr(&section.id),
                escape_attr(&section.title)
            )
            .unwrap();
        }

        out.push_str("</div></nav>");
    }

    fn section(&self, section: &Section, out: &mut String) {
        let id = escape_attr(&section.id);
        // Badge shows the number part of the id
        let badge = section
            .id
            .strip_prefix(SECTION_ID_PREFIX)
            .unwrap_or(&section.id);

        write!(
            out,
            r#"<section id="{id}" class="notes-section" data-collapsible><div class="notes-section-header"><h3 class="notes-section-title"><span class="notes-section-number">{}</span>{}</h3><button type="button" class="notes-collapse" aria-expanded="true" aria-controls="{id}-body"></button></div><div id="{id}-body" class="notes-section-body">"#,
            escape_attr(badge),
            escape_attr(&section.title)
        )
        .unwrap();

        if let Some(description) = &section.description {
            write!(
                out,
                r#"<p class="notes-description">{}</p>"#,
                escape_attr(description)
            )
            .unwrap();
        }

        for block in &section.blocks {
            self.code_block(block, out);
        }

        out.push_str("</div></section>");
    }

    fn code_block(&self, block: &CodeBlock, out: &mut String) {
        let language = escape_attr(&block.language);

        out.push_str(r#"<div class="code-block">"#);

        if let Some(filename) = &block.filename {
            write!(
                out,
                r#"<div class="code-filename"><span>{FILE_ICON} {}</span><span class="code-language">{language}</span></div>"#,
                escape_attr(filename)
            )
            .unwrap();
        }

        write!(
            out,
            r#"<div class="code-body"><button type="button" class="copy-btn" data-copy data-copied-label="{}">{}</button><pre><code class="language-{language}">{}</code></pre></div>"#,
            escape_attr(&self.options.copied_label),
            escape_attr(&self.options.copy_label),
            self.highlighter.highlight(&block.code, &block.language)
        )
        .unwrap();

        out.push_str("</div>");
    }
}
