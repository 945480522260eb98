//! Highlight error types.

/// Error raised while building a rule table.
///
/// Highlighting itself never fails; only registering a user-defined rule can.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Rule pattern is not a valid regular expression.
    #[error("Invalid pattern for language {language}: {pattern}: {source}")]
    InvalidPattern {
        /// Language the rule was registered for.
        language: String,
        /// Offending pattern source.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Class name would break out of the generated `class` attribute.
    #[error("Invalid class name for language {language}: {class:?}")]
    InvalidClass {
        /// Language the rule was registered for.
        language: String,
        /// Offending class name.
        class: String,
    },
}
