use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension used for any language without an entry in the table.
pub const FALLBACK_EXTENSION: &str = "txt";

/// The fixed set of language tags a snippet can carry.
///
/// Tags are stored as lowercase strings. Anything outside the set (on input or in
/// previously stored data) maps to [`Language::Plaintext`], so reading a collection
/// never fails because of an unfamiliar tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Ruby,
    Rust,
    Php,
    Swift,
    Kotlin,
    Html,
    Css,
    Sql,
    Bash,
    Json,
    Yaml,
    Markdown,
    #[default]
    Plaintext,
}

impl Language {
    pub const ALL: [Language; 21] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Ruby,
        Language::Rust,
        Language::Php,
        Language::Swift,
        Language::Kotlin,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Bash,
        Language::Json,
        Language::Yaml,
        Language::Markdown,
        Language::Plaintext,
    ];

    /// The stored tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Bash => "bash",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Plaintext => "plaintext",
        }
    }

    /// Looks the tag up in the extension table. `None` means "use the fallback".
    pub fn extension(&self) -> Option<&'static str> {
        let ext = match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Python => "py",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Go => "go",
            Language::Ruby => "rb",
            Language::Rust => "rs",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Bash => "sh",
            Language::Json => "json",
            Language::Yaml => "yml",
            Language::Markdown => "md",
            Language::Plaintext => return None,
        };
        Some(ext)
    }

    pub fn extension_or_fallback(&self) -> &'static str {
        self.extension().unwrap_or(FALLBACK_EXTENSION)
    }

    /// Tag with its first letter capitalized, as shown in pickers ("Python", "Cpp").
    pub fn display_name(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Strict lookup: `None` for tags outside the set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lower = tag.trim().to_lowercase();
        Language::ALL.into_iter().find(|l| l.as_str() == lower)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from(s))
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Language::from_tag(tag).unwrap_or_default()
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::from(tag.as_str())
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_fall_back_to_plaintext() {
        assert_eq!(Language::from("brainfuck"), Language::Plaintext);
        assert_eq!(Language::from(""), Language::Plaintext);
    }

    #[test]
    fn tags_are_matched_case_insensitively() {
        assert_eq!(Language::from("Python"), Language::Python);
        assert_eq!(Language::from(" RUST "), Language::Rust);
    }

    #[test]
    fn extension_table() {
        assert_eq!(Language::Python.extension(), Some("py"));
        assert_eq!(Language::Yaml.extension(), Some("yml"));
        assert_eq!(Language::CSharp.extension(), Some("cs"));
        assert_eq!(Language::Bash.extension(), Some("sh"));
        assert_eq!(Language::Plaintext.extension(), None);
        assert_eq!(Language::Plaintext.extension_or_fallback(), "txt");
    }

    #[test]
    fn every_tag_round_trips_through_its_string() {
        for lang in Language::ALL {
            assert_eq!(Language::from(lang.as_str()), lang);
        }
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&Language::TypeScript).unwrap();
        assert_eq!(json, "\"typescript\"");
        let parsed: Language = serde_json::from_str("\"cobol\"").unwrap();
        assert_eq!(parsed, Language::Plaintext);
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(Language::JavaScript.display_name(), "Javascript");
        assert_eq!(Language::C.display_name(), "C");
    }
}
