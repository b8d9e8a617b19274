//! Typed configuration for proj-audit.
//!
//! Configuration documents (languages, analyzers, scoring) are written in the
//! block grammar parsed by `audit-yaml` and projected into the types here.
//! Built-in versions of each document are compiled into the crate.

pub mod analyzers;
pub mod config;
pub mod document;
pub mod error;
pub mod languages;
pub mod scoring;

pub use analyzers::{AnalyzerToggles, default_analyzers, load_analyzers_file, parse_analyzers};
pub use config::Config;
pub use error::{Error, Result};
pub use languages::{
    LanguageConfig, LanguageMap, default_languages, load_languages_file,
    load_languages_or_default, merge_language_maps, parse_languages,
};
pub use scoring::{
    AgeThreshold, Bounds, CategoryRule, CategoryRules, EffortRules, PolishWeights,
    RangeThreshold, ScoringConfig, default_scoring, load_scoring_file, load_scoring_or_default,
    parse_scoring,
};

/// Append `more` to `base`, trimming entries and dropping blanks and duplicates.
pub(crate) fn merge_unique(base: &[String], more: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    base.iter()
        .chain(more)
        .map(|item| item.trim())
        .filter(|item| !item.is_empty() && seen.insert(*item))
        .map(str::to_string)
        .collect()
}
