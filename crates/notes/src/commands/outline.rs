//! `outline` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use notes_sections::{Section, decompose};

use super::{read_source, write_output};
use crate::error::CliError;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Notes file to outline.
    file: PathBuf,
}

impl OutlineArgs {
    /// Execute the outline command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = read_source(&self.file)?;
        let sections = decompose(&source);
        tracing::info!(file = %self.file.display(), sections = sections.len(), "Outlined notes");

        write_output(None, &format_outline(&sections))
    }
}

/// One line per section, plus an indented line for its description.
fn format_outline(sections: &[Section]) -> String {
    let mut out = String::new();

    for (index, section) in sections.iter().enumerate() {
        let number = section.number().unwrap_or(index + 1);
        write!(out, "{number:>3}. {}", section.title).unwrap();

        if !section.blocks.is_empty() {
            let mut languages: Vec<&str> = Vec::new();
            for block in &section.blocks {
                if !languages.contains(&block.language.as_str()) {
                    languages.push(&block.language);
                }
            }
            let noun = if section.blocks.len() == 1 { "block" } else { "blocks" };
            write!(
                out,
                " [{} {noun}: {}]",
                section.blocks.len(),
                languages.join(", ")
            )
            .unwrap();
        }
        out.push('\n');

        if let Some(description) = &section.description {
            writeln!(out, "     {description}").unwrap();
        }
    }

    out
}
