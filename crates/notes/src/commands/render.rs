//! `render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use notes_config::{CliSettings, Config, OutputFormat, RenderConfig};
use notes_highlight::Highlighter;
use notes_renderer::{CodeViewer, ViewerOptions};
use notes_sections::decompose;

use super::{build_registry, read_source, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Notes file to render.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover notes.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title of the quick navigation bar (overrides config).
    #[arg(long)]
    navigation_title: Option<String>,

    /// Don't render the quick navigation bar.
    #[arg(long)]
    no_navigation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Code viewer HTML fragment.
    Html,
    /// Decomposed sections as JSON.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails, the input cannot be
    /// read, custom highlight rules are invalid or output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            format: self.format.map(Into::into),
            navigation_title: self.navigation_title,
            show_navigation: self.no_navigation.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source = read_source(&self.file)?;

        let (rendered, section_count) = match config.render.format {
            OutputFormat::Html => {
                let registry = build_registry(&config)?;
                let viewer = CodeViewer::new(Highlighter::new(&registry))
                    .with_options(viewer_options(&config.render));
                let result = viewer.render_document(&source);
                (result.html, result.sections.len())
            }
            OutputFormat::Json => {
                let sections = decompose(&source);
                (serde_json::to_string_pretty(&sections)?, sections.len())
            }
        };

        tracing::info!(
            file = %self.file.display(),
            format = ?config.render.format,
            sections = section_count,
            "Rendered notes"
        );

        if section_count == 0 {
            output.warning(&format!(
                "No sections found in {} (sections start at a #, ## or ### header)",
                self.file.display()
            ));
        }

        write_output(self.output.as_deref(), &rendered)?;
        if let Some(path) = &self.output {
            output.success(&format!(
                "Rendered {section_count} sections to {}",
                path.display()
            ));
        }

        Ok(())
    }
}

fn viewer_options(render: &RenderConfig) -> ViewerOptions {
    ViewerOptions {
        show_navigation: render.show_navigation,
        navigation_title: render.navigation_title.clone(),
        copy_label: render.copy_label.clone(),
        copied_label: render.copied_label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Html), OutputFormat::Html);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }

    #[test]
    fn test_viewer_options_from_config() {
        let render = RenderConfig {
            show_navigation: false,
            navigation_title: "Sommaire".to_owned(),
            ..RenderConfig::default()
        };

        let options = viewer_options(&render);

        assert!(!options.show_navigation);
        assert_eq!(options.navigation_title, "Sommaire");
        assert_eq!(options.copy_label, "Copy");
        assert_eq!(options.copied_label, "Copied!");
    }

    #[test]
    fn test_execute_writes_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("course.md");
        let config = dir.path().join("notes.toml");
        let out = dir.path().join("course.html");
        std::fs::write(&input, "# Setup\n**install.sh**\n```bash\nnpm install\n```\n").unwrap();
        std::fs::write(&config, "[render]\nnavigation_title = \"Contents\"\n").unwrap();

        RenderArgs {
            file: input,
            config: Some(config),
            format: None,
            output: Some(out.clone()),
            navigation_title: None,
            no_navigation: false,
        }
        .execute()
        .unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with(r#"<div class="notes-viewer">"#));
        assert!(html.contains(r#"<h3 class="notes-nav-title">Contents</h3>"#));
        assert!(html.contains("📄 install.sh"));
        assert!(html.contains(r#"<span class="text-green-300">npm</span> install"#));
    }

    #[test]
    fn test_execute_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("course.md");
        let config = dir.path().join("notes.toml");
        let out = dir.path().join("course.json");
        std::fs::write(&input, "## Intro\nWelcome\n").unwrap();
        std::fs::write(&config, "").unwrap();

        RenderArgs {
            file: input,
            config: Some(config),
            format: Some(FormatArg::Json),
            output: Some(out.clone()),
            navigation_title: None,
            no_navigation: false,
        }
        .execute()
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json[0]["id"], "section-1");
        assert_eq!(json[0]["title"], "Intro");
        assert_eq!(json[0]["description"], "Welcome");
        assert_eq!(json[0]["blocks"], serde_json::json!([]));
    }

    #[test]
    fn test_execute_missing_config() {
        let dir = tempfile::tempdir().unwrap();

        let result = RenderArgs {
            file: dir.path().join("course.md"),
            config: Some(dir.path().join("missing.toml")),
            format: None,
            output: None,
            navigation_title: None,
            no_navigation: false,
        }
        .execute();

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
