//! Reading and decoding configuration documents
//!
//! Every typed document goes through the same two steps: parse the text into
//! a generic tree, then project the tree into the target type.

use std::fs;
use std::path::Path;

use audit_yaml::FromValue;

use crate::{Error, Result};

/// Built-in language table.
pub const DEFAULT_LANGUAGES_YAML: &str = include_str!("../defaults/languages.yaml");

/// Built-in analyzer toggles.
pub const DEFAULT_ANALYZERS_YAML: &str = include_str!("../defaults/analyzers.yaml");

/// Built-in scoring rules.
pub const DEFAULT_SCORING_YAML: &str = include_str!("../defaults/scoring.yaml");

/// Parse and project `text`. `document` names the source in errors.
pub fn decode<T: FromValue>(text: &str, document: &str) -> Result<T> {
    let value = audit_yaml::parse(text).map_err(|e| Error::document(document, e))?;
    audit_yaml::project(&value).map_err(|e| Error::document(document, e))
}

/// Read a document from disk and decode it.
pub fn load<T: FromValue>(path: &Path, kind: &str) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), kind, bytes = text.len(), "loading document");
    decode(&text, &format!("{kind} file {}", path.display()))
}

/// Load `path`, falling back to `builtin` if it cannot be read or decoded.
pub fn load_or<T: FromValue>(
    path: &Path,
    kind: &str,
    builtin: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match load(path, kind) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("Falling back to built-in {kind}: {e}");
            builtin()
        }
    }
}
