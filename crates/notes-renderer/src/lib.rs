//! Code viewer HTML fragment renderer for course notes.
//!
//! [`CodeViewer`] turns decomposed [`Section`]s into the fragment a notes
//! page embeds: a quick navigation bar linking to every section, then one
//! collapsible block per section with its description and highlighted,
//! copy-ready code listings.
//!
//! The fragment carries hooks (`data-collapsible`, `data-copy`) for the
//! page's own script; collapse and copy state are not rendered.
//!
//! # Example
//!
//! ```
//! use notes_highlight::Highlighter;
//! use notes_renderer::CodeViewer;
//!
//! let viewer = CodeViewer::new(Highlighter::default());
//! let result = viewer.render_document("## Setup\n```bash\nnpm install\n```");
//!
//! assert_eq!(result.sections.len(), 1);
//! assert!(result.html.contains(r##"<a href="#section-1" class="notes-nav-link">Setup</a>"##));
//! ```

mod html;
mod viewer;

pub use notes_sections::Section;
pub use viewer::{CodeViewer, RenderResult, ViewerOptions};
