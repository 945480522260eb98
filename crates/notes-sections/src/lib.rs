//! Section and code block decomposition for course notes.
//!
//! A notes document is prose, `#`-style headers and fenced code listings.
//! [`decompose`] turns it into an ordered list of [`Section`]s, each holding
//! the [`CodeBlock`]s fenced under its header. Nothing else of markdown is
//! interpreted.
//!
//! # Example
//!
//! ```
//! use notes_sections::decompose;
//!
//! let sections = decompose("## Setup\n```bash\nnpm install\n```");
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].id, "section-1");
//! assert_eq!(sections[0].title, "Setup");
//! assert_eq!(sections[0].blocks[0].language, "bash");
//! assert_eq!(sections[0].blocks[0].code, "npm install");
//! ```

mod decomposer;
mod filename;
mod line;
mod section;

pub use decomposer::decompose;
pub use line::{DEFAULT_LANGUAGE, FENCE};
pub use section::{CodeBlock, SECTION_ID_PREFIX, Section};
