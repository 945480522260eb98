//! Configuration management for the notes viewer.
//!
//! Parses `notes.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [render]
//! format = "html"
//! navigation_title = "Quick navigation"
//! copy_label = "Copy"
//! copied_label = "Copied!"
//!
//! [[highlight.languages.rust.rules]]
//! pattern = '\b(fn|let|mut|pub|impl)\b'
//! class = "text-purple-400"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override navigation bar title.
    pub navigation_title: Option<String>,
    /// Override navigation bar visibility.
    pub show_navigation: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "notes.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fragment rendering configuration.
    pub render: RenderConfig,
    /// Highlight rule configuration.
    pub highlight: HighlightConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output format of the `render` command.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Code viewer HTML fragment.
    #[default]
    Html,
    /// Decomposed sections as JSON.
    Json,
}

/// Fragment rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Whether to render the quick navigation bar.
    pub show_navigation: bool,
    /// Heading of the quick navigation bar.
    pub navigation_title: String,
    /// Label of the copy button.
    pub copy_label: String,
    /// Label the copy button switches to once clicked.
    pub copied_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            show_navigation: true,
            navigation_title: "Quick navigation".to_owned(),
            copy_label: "Copy".to_owned(),
            copied_label: "Copied!".to_owned(),
        }
    }
}

/// Highlight rule configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// User-defined rule tables, keyed by language identifier.
    ///
    /// A table replaces the built-in one for the same language.
    pub languages: BTreeMap<String, LanguageConfig>,
}

/// Rule table for one language.
#[derive(Debug, Deserialize)]
pub struct LanguageConfig {
    /// Rules in application order.
    pub rules: Vec<RuleConfig>,
}

/// A single highlight rule.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// Regular expression matched against escaped code text.
    pub pattern: String,
    /// CSS class of the generated span.
    pub class: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `notes.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.render.format = format;
        }
        if let Some(title) = &settings.navigation_title {
            self.render.navigation_title.clone_from(title);
        }
        if let Some(show) = settings.show_navigation {
            self.render.show_navigation = show;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. Rule patterns are only
    /// checked for presence here; they are compiled when the highlight
    /// registry is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()?;
        self.validate_highlight()?;
        Ok(())
    }

    /// Validate rendering labels.
    fn validate_render(&self) -> Result<(), ConfigError> {
        // The title is only shown with the navigation bar
        if self.render.show_navigation {
            require_non_empty(&self.render.navigation_title, "render.navigation_title")?;
        }
        require_non_empty(&self.render.copy_label, "render.copy_label")?;
        require_non_empty(&self.render.copied_label, "render.copied_label")?;
        Ok(())
    }

    /// Validate user-defined rule tables.
    fn validate_highlight(&self) -> Result<(), ConfigError> {
        for (language, table) in &self.highlight.languages {
            require_non_empty(language, "highlight.languages key")?;

            if table.rules.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "highlight.languages.{language} must define at least one rule"
                )));
            }

            for (idx, rule) in table.rules.iter().enumerate() {
                let field = format!("highlight.languages.{language}.rules[{idx}]");
                require_non_empty(&rule.pattern, &format!("{field}.pattern"))?;
                require_non_empty(&rule.class, &format!("{field}.class"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.format, OutputFormat::Html);
        assert!(config.render.show_navigation);
        assert_eq!(config.render.navigation_title, "Quick navigation");
        assert_eq!(config.render.copy_label, "Copy");
        assert_eq!(config.render.copied_label, "Copied!");
        assert!(config.highlight.languages.is_empty());
        assert!(config.config_path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.format, OutputFormat::Html);
        assert_eq!(config.render.copy_label, "Copy");
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r#"
[render]
format = "json"
show_navigation = false
navigation_title = "Navigation rapide"
copy_label = "Copier"
copied_label = "Copié !"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.format, OutputFormat::Json);
        assert!(!config.render.show_navigation);
        assert_eq!(config.render.navigation_title, "Navigation rapide");
        assert_eq!(config.render.copy_label, "Copier");
        assert_eq!(config.render.copied_label, "Copié !");
    }

    #[test]
    fn test_parse_partial_render_config_keeps_defaults() {
        let toml = r#"
[render]
copy_label = "Copier"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.copy_label, "Copier");
        assert_eq!(config.render.copied_label, "Copied!");
        assert!(config.render.show_navigation);
    }

    #[test]
    fn test_parse_unknown_format() {
        let toml = r#"
[render]
format = "pdf"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_highlight_languages() {
        let toml = r#"
[[highlight.languages.rust.rules]]
pattern = '\b(fn|let)\b'
class = "text-purple-400"

[[highlight.languages.rust.rules]]
pattern = '//.*'
class = "text-gray-500"

[highlight.languages.yaml]
rules = [{ pattern = '^\w+:', class = "text-blue-300" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let languages: Vec<&str> = config
            .highlight
            .languages
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(languages, vec!["rust", "yaml"]);

        let rust = &config.highlight.languages["rust"];
        assert_eq!(
            rust.rules,
            vec![
                RuleConfig {
                    pattern: r"\b(fn|let)\b".to_owned(),
                    class: "text-purple-400".to_owned(),
                },
                RuleConfig {
                    pattern: "//.*".to_owned(),
                    class: "text-gray-500".to_owned(),
                },
            ]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_copy_label() {
        let toml = r#"
[render]
copy_label = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("render.copy_label"));
    }

    #[test]
    fn test_validate_empty_title_allowed_without_navigation() {
        let toml = r#"
[render]
show_navigation = false
navigation_title = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_language_without_rules() {
        let toml = r"
[highlight.languages.rust]
rules = []
";
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("highlight.languages.rust"));
    }

    #[test]
    fn test_validate_rule_without_class() {
        let toml = r#"
[[highlight.languages.rust.rules]]
pattern = "fn"
class = " "
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            err.to_string()
                .contains("highlight.languages.rust.rules[0].class")
        );
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nformat = \"json\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[render]\nformat = \"json\"\n").unwrap();

        let settings = CliSettings {
            format: Some(OutputFormat::Html),
            navigation_title: Some("Contents".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.render.format, OutputFormat::Html);
        assert_eq!(config.render.navigation_title, "Contents");
        assert!(config.render.show_navigation); // Unchanged
    }

    #[test]
    fn test_cli_settings_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            navigation_title: Some(String::new()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("render.navigation_title"));
    }

    #[test]
    fn test_apply_cli_settings_empty_keeps_values() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.render.format, OutputFormat::Html);
        assert_eq!(config.render.navigation_title, "Quick navigation");
    }

    #[test]
    fn test_discover_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("courses").join("symfony");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("course");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }
}
