//! Analyzer on/off switches

use std::collections::BTreeMap;
use std::path::Path;

use crate::document::{self, DEFAULT_ANALYZERS_YAML};
use crate::Result;

/// Analyzer name (lower case) to enabled flag.
pub type AnalyzerToggles = BTreeMap<String, bool>;

/// Parse an analyzers document. Names are lower-cased.
pub fn parse_analyzers(text: &str) -> Result<AnalyzerToggles> {
    document::decode::<AnalyzerToggles>(text, "analyzers document").map(normalize)
}

/// Load an analyzers file from disk.
pub fn load_analyzers_file(path: &Path) -> Result<AnalyzerToggles> {
    document::load::<AnalyzerToggles>(path, "analyzers").map(normalize)
}

/// The built-in toggles: every known analyzer enabled.
pub fn default_analyzers() -> Result<AnalyzerToggles> {
    document::decode::<AnalyzerToggles>(DEFAULT_ANALYZERS_YAML, "built-in analyzers.yaml")
        .map(normalize)
}

fn normalize(toggles: AnalyzerToggles) -> AnalyzerToggles {
    toggles
        .into_iter()
        .map(|(name, enabled)| (name.trim().to_lowercase(), enabled))
        .collect()
}
