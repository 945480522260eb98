//! CLI command implementations.

mod highlight;
mod languages;
mod outline;
mod render;

use std::io::Write;
use std::path::Path;

use notes_config::Config;
use notes_highlight::{HighlightError, Registry};

use crate::error::CliError;

pub(crate) use highlight::HighlightArgs;
pub(crate) use languages::LanguagesArgs;
pub(crate) use outline::OutlineArgs;
pub(crate) use render::RenderArgs;

/// Built-in rule tables extended with the `[highlight.languages]` config.
///
/// A configured language replaces the built-in table of the same name.
fn build_registry(config: &Config) -> Result<Registry, HighlightError> {
    let mut registry = Registry::builtin().clone();

    for (language, table) in &config.highlight.languages {
        let replaces_builtin = registry.contains(language);
        registry.define(
            language,
            table
                .rules
                .iter()
                .map(|rule| (rule.pattern.as_str(), rule.class.as_str())),
        )?;
        tracing::info!(
            language = %language,
            rules = table.rules.len(),
            replaces_builtin,
            "Loaded custom highlight rules"
        );
    }

    Ok(registry)
}

fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("Failed to read {}: {e}", path.display())))
}

/// Write `content` to `path`, or to stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
