//! Language rule registry.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::HighlightError;
use crate::languages::BUILTIN;

/// Language whose table is used when a block's language has none.
pub const FALLBACK_LANGUAGE: &str = "html";

static BUILTIN_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::default();
    for (language, table) in BUILTIN {
        registry
            .define(language, table.iter().copied())
            .expect("built-in highlight rules must compile");
    }
    registry
});

/// A single highlight rule: every match of `pattern` is wrapped in a span
/// carrying `class`.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    class: String,
}

impl Rule {
    /// Compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// CSS class put on matched spans.
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Mapping from language identifier to an ordered rule table.
///
/// Lookups for unknown identifiers resolve to the [`FALLBACK_LANGUAGE`]
/// table. A registry is immutable once handed to a
/// [`Highlighter`](crate::Highlighter), so it can be shared freely between
/// threads.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    tables: HashMap<String, Vec<Rule>>,
}

impl Registry {
    /// The built-in registry (`php`, `twig`, `bash`, `html`, `javascript`, `json`).
    pub fn builtin() -> &'static Registry {
        &BUILTIN_REGISTRY
    }

    /// Define the rule table for `language`, replacing any existing one.
    ///
    /// Rules are applied in iteration order. Nothing is registered if any
    /// rule is invalid.
    pub fn define<I, P, C>(&mut self, language: &str, rules: I) -> Result<(), HighlightError>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let table = rules
            .into_iter()
            .map(|(pattern, class)| compile_rule(language, pattern.as_ref(), class.into()))
            .collect::<Result<Vec<_>, _>>()?;

        if self.tables.insert(language.to_owned(), table).is_some() {
            tracing::debug!(language, "Replaced highlight rules");
        }
        Ok(())
    }

    /// Whether `language` has its own table.
    pub fn contains(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Rules for `language`, or the fallback table when it has none.
    ///
    /// Returns an empty slice only if the fallback table is missing too.
    pub fn rules(&self, language: &str) -> &[Rule] {
        self.tables
            .get(language)
            .or_else(|| self.tables.get(FALLBACK_LANGUAGE))
            .map_or(&[], Vec::as_slice)
    }

    /// Languages with their own table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

fn compile_rule(language: &str, pattern: &str, class: String) -> Result<Rule, HighlightError> {
    if class.is_empty() || class.contains(['"', '<', '>', '&']) {
        return Err(HighlightError::InvalidClass {
            language: language.to_owned(),
            class,
        });
    }

    let pattern = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
        language: language.to_owned(),
        pattern: pattern.to_owned(),
        source,
    })?;

    Ok(Rule { pattern, class })
}
