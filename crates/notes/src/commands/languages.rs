//! `languages` command implementation.

use std::path::PathBuf;

use clap::Args;
use notes_config::Config;

use super::{build_registry, write_output};
use crate::error::CliError;

/// Arguments for the languages command.
#[derive(Args)]
pub(crate) struct LanguagesArgs {
    /// Path to configuration file (default: auto-discover notes.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LanguagesArgs {
    /// Execute the languages command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails or custom highlight
    /// rules are invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let registry = build_registry(&config)?;

        write_output(None, &registry.languages().join("\n"))
    }
}
