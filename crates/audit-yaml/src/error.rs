//! Error types for audit-yaml

/// Result type for audit-yaml operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while tokenizing, parsing, or projecting a document.
///
/// Parse-time variants carry the 1-based source line of the offending
/// token. Projection variants carry the dotted path of the value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("line {line}: indentation must be multiples of two spaces (found {indent})")]
    MalformedIndentation { line: usize, indent: usize },

    #[error("line {line}: tab characters are not allowed in indentation")]
    TabIndentation { line: usize },

    #[error("line {line}: unexpected indentation")]
    UnexpectedIndentation { line: usize },

    #[error("line {line}: expected key")]
    ExpectedKey { line: usize },

    #[error("line {line}: expected ':' after quoted key")]
    ExpectedColon { line: usize },

    #[error("line {line}: expected '- ' list item")]
    ExpectedListItem { line: usize },

    #[error("shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("unknown field `{field}` at {path}")]
    UnknownField { path: String, field: String },

    #[error("missing field `{field}` at {path}")]
    MissingField { path: String, field: String },
}

impl Error {
    pub fn shape(path: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            path: path.into(),
            expected,
            found: found.into(),
        }
    }

    /// Source line of a parse-time error, `None` for projection errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedIndentation { line, .. }
            | Error::TabIndentation { line }
            | Error::UnexpectedIndentation { line }
            | Error::ExpectedKey { line }
            | Error::ExpectedColon { line }
            | Error::ExpectedListItem { line } => Some(*line),
            Error::ShapeMismatch { .. } | Error::UnknownField { .. } | Error::MissingField { .. } => {
                None
            }
        }
    }
}
