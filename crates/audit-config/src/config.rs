//! Run configuration for proj-audit
//!
//! A run starts from [`Config::builtin`], optionally merges a JSON config
//! file over it, then applies command-line overrides. Language and scoring
//! documents referenced by path are resolved last.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyzers::{AnalyzerToggles, default_analyzers};
use crate::languages::{LanguageMap, default_languages, load_languages_file, merge_language_maps};
use crate::scoring::{ScoringConfig, default_scoring, load_scoring_file};
use crate::{Error, Result, merge_unique};

/// Directories skipped regardless of language.
const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    "bin",
    "dist",
    "build",
    "out",
    "target",
    ".gocache",
    ".cache",
    "venv",
    ".venv",
    "__pycache__",
    ".cargo",
];

/// Output formats understood by the renderers.
pub const FORMATS: &[&str] = &["tree", "markdown", "json"];

/// Full run configuration.
///
/// `Default` is the empty value used for config files and overrides, where
/// unset fields mean "keep the base value". Use [`Config::builtin`] for the
/// starting configuration of a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory to scan
    pub root: String,
    /// Maximum scan depth, 0 for unlimited
    pub max_depth: usize,
    /// Output format, one of [`FORMATS`]
    pub format: String,
    /// Directory names never descended into
    pub ignore_dirs: Vec<String>,
    /// Whether dot-prefixed directories are scanned
    pub include_hidden: bool,
    /// Languages document merged over the language table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages_file: Option<PathBuf>,
    pub languages: LanguageMap,
    /// Analyzer overrides; unlisted analyzers keep their built-in state
    pub analyzers: AnalyzerToggles,
    /// Scoring document replacing the scoring rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// The built-in configuration.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            root: ".".to_string(),
            max_depth: 0,
            format: "tree".to_string(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect(),
            include_hidden: false,
            languages_file: None,
            languages: default_languages()?,
            analyzers: BTreeMap::new(),
            scoring_file: None,
            scoring: Some(default_scoring()?),
        })
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = serde_json::from_str(&content).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Merge `overrides` over `self`.
    ///
    /// Set scalar fields replace, ignore dirs are appended without
    /// duplicates, language entries are replaced per name, analyzer flags
    /// overlay, and `include_hidden` can only be switched on.
    pub fn merge(mut self, overrides: Config) -> Self {
        if !overrides.root.is_empty() {
            self.root = overrides.root;
        }
        if overrides.max_depth != 0 {
            self.max_depth = overrides.max_depth;
        }
        if !overrides.format.is_empty() {
            self.format = overrides.format;
        }
        if !overrides.ignore_dirs.is_empty() {
            self.ignore_dirs = merge_unique(&self.ignore_dirs, &overrides.ignore_dirs);
        }
        self.include_hidden |= overrides.include_hidden;
        if overrides.languages_file.is_some() {
            self.languages_file = overrides.languages_file;
        }
        self.languages.extend(overrides.languages);
        self.analyzers.extend(overrides.analyzers);
        if overrides.scoring_file.is_some() {
            self.scoring_file = overrides.scoring_file;
        }
        if overrides.scoring.is_some() {
            self.scoring = overrides.scoring;
        }
        self
    }

    /// Merge the languages file, if any, over the language table.
    pub fn resolve_languages(&mut self) -> Result<()> {
        if let Some(path) = &self.languages_file {
            let extra = load_languages_file(path)?;
            self.languages = merge_language_maps(&self.languages, &extra);
        }
        Ok(())
    }

    /// Replace the scoring rules with the scoring file, if any.
    pub fn resolve_scoring(&mut self) -> Result<()> {
        if let Some(path) = &self.scoring_file {
            self.scoring = Some(load_scoring_file(path)?);
        }
        Ok(())
    }

    /// Scoring rules in effect, the built-in ones if none are set.
    pub fn scoring_or_default(&self) -> Result<ScoringConfig> {
        match &self.scoring {
            Some(scoring) => Ok(scoring.clone()),
            None => default_scoring(),
        }
    }

    /// Every directory name to skip: ignore dirs plus each language's skip dirs.
    pub fn all_ignore_dirs(&self) -> Vec<String> {
        self.ignore_dirs
            .iter()
            .chain(self.languages.values().flat_map(|lang| lang.skip_dirs.iter()))
            .map(|dir| dir.trim())
            .filter(|dir| !dir.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lower-cased, dot-prefixed extension to language name.
    ///
    /// When two languages claim an extension, the later name in sort order wins.
    pub fn extension_mapping(&self) -> BTreeMap<String, String> {
        let mut mapping = BTreeMap::new();
        for (language, config) in &self.languages {
            for ext in &config.extensions {
                let clean = ext.trim();
                if clean.is_empty() {
                    continue;
                }
                let ext = if clean.starts_with('.') {
                    clean.to_lowercase()
                } else {
                    format!(".{}", clean.to_lowercase())
                };
                mapping.insert(ext, language.clone());
            }
        }
        mapping
    }

    /// Disable analyzers by name (case-insensitive).
    pub fn disable_analyzers<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() {
                self.analyzers.insert(name, false);
            }
        }
    }

    /// Built-in analyzer toggles overlaid with the configured ones.
    pub fn effective_analyzers(&self) -> Result<AnalyzerToggles> {
        let mut toggles = default_analyzers()?;
        for (name, enabled) in &self.analyzers {
            let name = name.to_lowercase();
            if !toggles.contains_key(&name) {
                tracing::warn!("Unknown analyzer in configuration: {name}");
            }
            toggles.insert(name, *enabled);
        }
        Ok(toggles)
    }

    /// Names of enabled analyzers; fails if there are none.
    pub fn enabled_analyzers(&self) -> Result<Vec<String>> {
        let enabled: Vec<String> = self
            .effective_analyzers()?
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect();
        if enabled.is_empty() {
            return Err(Error::NoAnalyzersEnabled);
        }
        Ok(enabled)
    }

    /// Check the settings that have a fixed set of values.
    pub fn validate(&self) -> Result<()> {
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(Error::UnknownFormat {
                format: self.format.clone(),
            });
        }
        self.enabled_analyzers().map(|_| ())
    }
}
