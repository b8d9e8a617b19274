//! Document validation

use std::fs;
use std::path::Path;

use audit_config::{load_analyzers_file, load_languages_file, load_scoring_file};
use colored::Colorize;

use crate::cli::DocumentKind;
use crate::error::{CliError, Result};

/// Validate `file` as a `kind` document and print a one-line summary
pub fn run_check(file: &Path, kind: DocumentKind) -> Result<()> {
    let kind = match kind {
        DocumentKind::Auto => detect_kind(file),
        explicit => explicit,
    };
    tracing::debug!(file = %file.display(), ?kind, "checking document");

    let summary = match kind {
        DocumentKind::Languages => {
            let langs = load_languages_file(file)?;
            let extensions: usize = langs.values().map(|l| l.extensions.len()).sum();
            format!("{} languages, {} extensions", langs.len(), extensions)
        }
        DocumentKind::Analyzers => {
            let toggles = load_analyzers_file(file)?;
            let enabled = toggles.values().filter(|on| **on).count();
            format!("{} analyzers, {} enabled", toggles.len(), enabled)
        }
        DocumentKind::Scoring => {
            let scoring = load_scoring_file(file)?;
            format!(
                "{} commit, {} active and {} recency thresholds",
                scoring.effort.commit.len(),
                scoring.effort.active.len(),
                scoring.recency.len()
            )
        }
        DocumentKind::Auto | DocumentKind::Generic => {
            let text = fs::read_to_string(file).map_err(|e| CliError::io(file, e))?;
            let value = audit_yaml::parse(&text)?;
            format!("{} at the root", value.kind())
        }
    };

    println!("{} {}: {}", "ok".green().bold(), file.display(), summary);
    Ok(())
}

/// Guess the document kind from the file name.
fn detect_kind(file: &Path) -> DocumentKind {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if stem.contains("language") {
        DocumentKind::Languages
    } else if stem.contains("analyzer") {
        DocumentKind::Analyzers
    } else if stem.contains("scoring") {
        DocumentKind::Scoring
    } else {
        DocumentKind::Generic
    }
}
