//! Rule-based syntax highlighting for course note code blocks.
//!
//! Code text is escaped once, then each rule of the language's table wraps
//! its matches in `<span class="...">` elements. Spans produced by an earlier
//! rule are never rescanned by a later one, so rules cannot nest or overlap.
//!
//! # Architecture
//!
//! - [`escape_html`]: entity-escapes `&`, `<` and `>`
//! - [`Registry`]: language identifier → ordered [`Rule`] table, with a
//!   built-in set and an `html` fallback for unknown languages
//! - [`Highlighter`]: applies a registry's rules to code text
//!
//! # Example
//!
//! ```
//! use notes_highlight::highlight;
//!
//! let html = highlight("npm install", "bash");
//! assert_eq!(html, r#"<span class="text-green-300">npm</span> install"#);
//! ```

mod error;
mod escape;
mod highlighter;
mod languages;
mod registry;
mod segment;

pub use error::HighlightError;
pub use escape::escape_html;
pub use highlighter::{Highlighter, highlight};
pub use registry::{FALLBACK_LANGUAGE, Registry, Rule};
