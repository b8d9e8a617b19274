//! Language table: extensions per language and directories to skip
//!
//! ```text
//! Go:
//!   extensions:
//!     - .go
//!   skipDirs:
//!     - vendor
//! "C#":
//!   extensions:
//!     - .cs
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use audit_yaml::{FromValue, MappingReader, Value};
use serde::{Deserialize, Serialize};

use crate::document::{self, DEFAULT_LANGUAGES_YAML};
use crate::{Result, merge_unique};

/// Language name to its configuration.
pub type LanguageMap = BTreeMap<String, LanguageConfig>;

/// Configuration for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguageConfig {
    /// File extensions, with or without a leading dot
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Directory names never scanned for this language
    #[serde(default)]
    pub skip_dirs: Vec<String>,
}

impl FromValue for LanguageConfig {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let config = Self {
            extensions: reader.or_default("extensions")?,
            skip_dirs: reader.or_default("skipDirs")?,
        };
        reader.finish()?;
        Ok(config)
    }
}

/// Parse a languages document.
pub fn parse_languages(text: &str) -> Result<LanguageMap> {
    document::decode(text, "languages document")
}

/// Load a languages file from disk.
pub fn load_languages_file(path: &Path) -> Result<LanguageMap> {
    document::load(path, "languages")
}

/// Load a languages file, falling back to the built-in table on failure.
pub fn load_languages_or_default(path: &Path) -> Result<LanguageMap> {
    document::load_or(path, "languages", default_languages)
}

/// The built-in language table.
pub fn default_languages() -> Result<LanguageMap> {
    document::decode(DEFAULT_LANGUAGES_YAML, "built-in languages.yaml")
}

/// Combine two language tables.
///
/// Languages present in both keep the base entries and gain the override's
/// extensions and skip dirs, without duplicates.
pub fn merge_language_maps(base: &LanguageMap, overrides: &LanguageMap) -> LanguageMap {
    let mut result = base.clone();
    for (name, lang) in overrides {
        result
            .entry(name.clone())
            .and_modify(|existing| {
                existing.extensions = merge_unique(&existing.extensions, &lang.extensions);
                existing.skip_dirs = merge_unique(&existing.skip_dirs, &lang.skip_dirs);
            })
            .or_insert_with(|| lang.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages_parse() {
        let langs = default_languages().unwrap();
        assert_eq!(langs.len(), 8);
        assert_eq!(langs["Go"].extensions, vec![".go"]);
        assert_eq!(langs["C#"].skip_dirs, vec!["bin", "obj"]);
        assert_eq!(langs["C/C++"].extensions.len(), 7);
    }

    #[test]
    fn test_language_without_body_is_empty() {
        let langs = parse_languages("Zig:\n").unwrap();
        assert_eq!(langs["Zig"], LanguageConfig::default());
    }

    #[test]
    fn test_merge_appends_for_existing_language() {
        let base = parse_languages("Go:\n  extensions:\n    - .go\n  skipDirs:\n    - vendor\n").unwrap();
        let overrides =
            parse_languages("Go:\n  extensions:\n    - .go\n    - .tmpl\nZig:\n  extensions:\n    - .zig\n")
                .unwrap();

        let merged = merge_language_maps(&base, &overrides);

        assert_eq!(merged["Go"].extensions, vec![".go", ".tmpl"]);
        assert_eq!(merged["Go"].skip_dirs, vec!["vendor"]);
        assert_eq!(merged["Zig"].extensions, vec![".zig"]);
    }
}
