//! Error types for audit-config

use std::path::PathBuf;

/// Result type for audit-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {document}: {source}")]
    Document {
        document: String,
        #[source]
        source: audit_yaml::Error,
    },

    #[error("Failed to parse JSON config at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown output format '{format}' (expected one of: tree, markdown, json)")]
    UnknownFormat { format: String },

    #[error("No analyzers enabled; enable at least one")]
    NoAnalyzersEnabled,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn document(document: impl Into<String>, source: audit_yaml::Error) -> Self {
        Self::Document {
            document: document.into(),
            source,
        }
    }

    /// Source line of the underlying parse error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Document { source, .. } => source.line(),
            _ => None,
        }
    }
}
