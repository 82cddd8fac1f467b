//! Repository language categories
//!
//! Maps the free-form `language` field of a repository onto a small fixed set
//! of categories the theme knows colours for. Unknown or missing languages
//! land in [`LanguageCategory::Neutral`].

use strum::{Display, EnumIter, IntoStaticStr};

/// Colour category for a repository's primary language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LanguageCategory {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Html,
    Css,
    Ruby,
    Go,
    Rust,
    Php,
    C,
    CSharp,
    Cpp,
    Shell,
    Swift,
    Kotlin,
    Dart,
    Vue,
    /// Anything not in the list above, including no language at all
    Neutral,
}

impl LanguageCategory {
    /// Categorise a language name, case-insensitively
    pub fn from_language(language: Option<&str>) -> Self {
        let Some(language) = language else {
            return Self::Neutral;
        };

        match language.trim().to_ascii_lowercase().as_str() {
            "javascript" => Self::JavaScript,
            "typescript" => Self::TypeScript,
            "python" => Self::Python,
            "java" => Self::Java,
            "html" => Self::Html,
            "css" => Self::Css,
            "ruby" => Self::Ruby,
            "go" => Self::Go,
            "rust" => Self::Rust,
            "php" => Self::Php,
            "c" => Self::C,
            "c#" | "csharp" => Self::CSharp,
            "c++" | "cpp" => Self::Cpp,
            "shell" => Self::Shell,
            "swift" => Self::Swift,
            "kotlin" => Self::Kotlin,
            "dart" => Self::Dart,
            "vue" => Self::Vue,
            _ => Self::Neutral,
        }
    }

    /// Stable class-like name, e.g. `language-rust` or `language-gray`
    pub fn class_name(self) -> String {
        match self {
            Self::Neutral => "language-gray".to_string(),
            other => format!("language-{}", other),
        }
    }
}
