//! `highlight` command implementation.

use std::path::PathBuf;

use clap::Args;
use notes_config::Config;
use notes_highlight::Highlighter;

use super::{build_registry, read_source, write_output};
use crate::error::CliError;

/// Arguments for the highlight command.
#[derive(Args)]
pub(crate) struct HighlightArgs {
    /// Source file to highlight.
    file: PathBuf,

    /// Language whose rules to apply (unknown languages use the html rules).
    #[arg(short, long)]
    language: String,

    /// Path to configuration file (default: auto-discover notes.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HighlightArgs {
    /// Execute the highlight command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails, the input cannot be
    /// read, custom highlight rules are invalid or output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let registry = build_registry(&config)?;
        let source = read_source(&self.file)?;

        let highlighter = Highlighter::new(&registry);
        if !highlighter.registry().contains(&self.language) {
            tracing::warn!(language = %self.language, "No rules for language, using html rules");
        }

        let highlighted = highlighter.highlight(&source, &self.language);
        write_output(self.output.as_deref(), &highlighted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_execute_with_custom_language() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.rs");
        let config = dir.path().join("notes.toml");
        let out = dir.path().join("main.html");
        std::fs::write(&input, "fn main() {}").unwrap();
        std::fs::write(
            &config,
            "[[highlight.languages.rust.rules]]\npattern = '\\bfn\\b'\nclass = \"kw\"\n",
        )
        .unwrap();

        HighlightArgs {
            file: input,
            language: "rust".to_owned(),
            config: Some(config),
            output: Some(out.clone()),
        }
        .execute()
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            r#"<span class="kw">fn</span> main() {}"#
        );
    }
}
