//! Built-in rule tables.
//!
//! Patterns run against already-escaped text, which is why the `html` table
//! matches `&lt;` rather than `<`. Within a table, earlier rules claim
//! characters first.
//!
//! Word characters and boundaries are ASCII-only: `$prénom` tags `$pr`.

/// Ordered `(pattern, class)` pairs for one language.
pub(crate) type RuleTable = &'static [(&'static str, &'static str)];

const PHP: RuleTable = &[
    (
        r"(?-u:\b)(class|function|public|private|protected|return|if|else|foreach|for|while|new|use|namespace|extends|implements|static|const|abstract|interface|trait)(?-u:\b)",
        "text-purple-400",
    ),
    (r"\$[0-9A-Za-z_]+", "text-blue-300"),
    (r"(#\[.+?\])", "text-yellow-300"),
    (r#"('.*?'|".*?")"#, "text-green-300"),
    (r"(?m)(//.*$|/\*[\s\S]*?\*/)", "text-gray-500"),
];

const TWIG: RuleTable = &[
    (r"(\{\{|\}\}|\{%|%\}|\{#|#\})", "text-yellow-400"),
    (
        r"(?-u:\b)(block|extends|include|if|else|endif|for|endfor|endblock|set)(?-u:\b)",
        "text-purple-400",
    ),
    (r#"('.*?'|".*?")"#, "text-green-300"),
    (r"(\|[a-z_]+)", "text-blue-300"),
];

const BASH: RuleTable = &[
    (r"(?m)(#.*$)", "text-gray-500"),
    (
        r"(?-u:\b)(symfony|npm|composer|php|cd|mkdir|ls)(?-u:\b)",
        "text-green-300",
    ),
    (r#"('.*?'|".*?")"#, "text-yellow-300"),
    (r"(\$[0-9A-Za-z_]+)", "text-blue-300"),
];

const HTML: RuleTable = &[
    (r"(&lt;/?[A-Za-z]+)", "text-blue-400"),
    (r"(\s[A-Za-z-]+)=", "text-yellow-300"),
    (r#"(".*?")"#, "text-green-300"),
];

const JAVASCRIPT: RuleTable = &[
    (
        r"(?-u:\b)(const|let|var|function|return|if|else|for|while|class|import|export|from|async|await)(?-u:\b)",
        "text-purple-400",
    ),
    (r#"('.*?'|".*?"|`.*?`)"#, "text-green-300"),
    (r"(?m)(//.*$)", "text-gray-500"),
];

const JSON: RuleTable = &[
    (r#"(".*?"):"#, "text-blue-300"),
    (r#":\s*(".*?")"#, "text-green-300"),
    (r":\s*([0-9]+|true|false|null)", "text-yellow-300"),
];

/// Every built-in language with its table.
pub(crate) const BUILTIN: &[(&str, RuleTable)] = &[
    ("php", PHP),
    ("twig", TWIG),
    ("bash", BASH),
    ("html", HTML),
    ("javascript", JAVASCRIPT),
    ("json", JSON),
];
