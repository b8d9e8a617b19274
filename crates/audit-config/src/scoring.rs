//! Scoring rules: threshold tables and category bounds
//!
//! Threshold lists are ordered; consumers take the first entry that applies,
//! so the document order is kept as written.

use std::path::Path;

use audit_yaml::{FromValue, MappingReader, Value};
use serde::{Deserialize, Serialize};

use crate::document::{self, DEFAULT_SCORING_YAML};
use crate::Result;

/// Complete scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub effort: EffortRules,
    pub polish: PolishWeights,
    pub recency: Vec<AgeThreshold>,
    pub categories: CategoryRules,
}

/// Points awarded for commit volume and active days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffortRules {
    pub commit: Vec<RangeThreshold>,
    pub active: Vec<RangeThreshold>,
}

/// Awards `points` once a value reaches `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeThreshold {
    pub min: i64,
    pub points: i64,
}

/// Awards `points` while an age in days is at most `max_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgeThreshold {
    pub max_days: i64,
    pub points: i64,
}

/// Points for each polish signal found in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolishWeights {
    pub readme: i64,
    pub tests: i64,
    pub ci: i64,
    pub docker: i64,
}

/// The named category rule groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryRules {
    pub experiment: CategoryRule,
    pub prototype: CategoryRule,
    pub archived: CategoryRule,
    pub product: CategoryRule,
}

impl CategoryRules {
    /// Rules in the order categories are tried.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CategoryRule)> {
        [
            ("experiment", &self.experiment),
            ("prototype", &self.prototype),
            ("archived", &self.archived),
            ("product", &self.product),
        ]
        .into_iter()
    }
}

/// Optional bounds per scoring dimension.
///
/// Serialized flat (`commitMin`, `effortMax`, ...), the same keys the
/// scoring document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "FlatCategoryRule", into = "FlatCategoryRule")]
pub struct CategoryRule {
    pub commit: Bounds,
    pub effort: Bounds,
    pub polish: Bounds,
    pub recency: Bounds,
}

/// Inclusive bounds; a missing side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct FlatCategoryRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effort_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effort_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polish_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polish_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recency_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recency_max: Option<i64>,
}

impl From<FlatCategoryRule> for CategoryRule {
    fn from(flat: FlatCategoryRule) -> Self {
        Self {
            commit: Bounds { min: flat.commit_min, max: flat.commit_max },
            effort: Bounds { min: flat.effort_min, max: flat.effort_max },
            polish: Bounds { min: flat.polish_min, max: flat.polish_max },
            recency: Bounds { min: flat.recency_min, max: flat.recency_max },
        }
    }
}

impl From<CategoryRule> for FlatCategoryRule {
    fn from(rule: CategoryRule) -> Self {
        Self {
            commit_min: rule.commit.min,
            commit_max: rule.commit.max,
            effort_min: rule.effort.min,
            effort_max: rule.effort.max,
            polish_min: rule.polish.min,
            polish_max: rule.polish.max,
            recency_min: rule.recency.min,
            recency_max: rule.recency.max,
        }
    }
}

impl Bounds {
    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl FromValue for ScoringConfig {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let config = Self {
            effort: reader.or_default("effort")?,
            polish: reader.or_default("polish")?,
            recency: reader.or_default("recency")?,
            categories: reader.or_default("categories")?,
        };
        reader.finish()?;
        Ok(config)
    }
}

impl FromValue for EffortRules {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let rules = Self {
            commit: reader.or_default("commit")?,
            active: reader.or_default("active")?,
        };
        reader.finish()?;
        Ok(rules)
    }
}

impl FromValue for RangeThreshold {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let threshold = Self {
            min: reader.required("min")?,
            points: reader.required("points")?,
        };
        reader.finish()?;
        Ok(threshold)
    }
}

impl FromValue for AgeThreshold {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let threshold = Self {
            max_days: reader.required("maxDays")?,
            points: reader.required("points")?,
        };
        reader.finish()?;
        Ok(threshold)
    }
}

impl FromValue for PolishWeights {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let weights = Self {
            readme: reader.or_default("readme")?,
            tests: reader.or_default("tests")?,
            ci: reader.or_default("ci")?,
            docker: reader.or_default("docker")?,
        };
        reader.finish()?;
        Ok(weights)
    }
}

impl FromValue for CategoryRules {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let rules = Self {
            experiment: reader.or_default("experiment")?,
            prototype: reader.or_default("prototype")?,
            archived: reader.or_default("archived")?,
            product: reader.or_default("product")?,
        };
        reader.finish()?;
        Ok(rules)
    }
}

/// Category rules are written flat: `commitMin`, `effortMax`, ...
impl FromValue for CategoryRule {
    fn from_value(value: &Value, path: &str) -> audit_yaml::Result<Self> {
        let mut reader = MappingReader::new(value, path)?;
        let rule = Self {
            commit: Bounds {
                min: reader.optional("commitMin")?,
                max: reader.optional("commitMax")?,
            },
            effort: Bounds {
                min: reader.optional("effortMin")?,
                max: reader.optional("effortMax")?,
            },
            polish: Bounds {
                min: reader.optional("polishMin")?,
                max: reader.optional("polishMax")?,
            },
            recency: Bounds {
                min: reader.optional("recencyMin")?,
                max: reader.optional("recencyMax")?,
            },
        };
        reader.finish()?;
        Ok(rule)
    }
}

/// Parse a scoring document.
pub fn parse_scoring(text: &str) -> Result<ScoringConfig> {
    document::decode(text, "scoring document")
}

/// Load a scoring file from disk.
pub fn load_scoring_file(path: &Path) -> Result<ScoringConfig> {
    document::load(path, "scoring")
}

/// Load a scoring file, falling back to the built-in rules on failure.
pub fn load_scoring_or_default(path: &Path) -> Result<ScoringConfig> {
    document::load_or(path, "scoring", default_scoring)
}

/// The built-in scoring rules.
pub fn default_scoring() -> Result<ScoringConfig> {
    document::decode(DEFAULT_SCORING_YAML, "built-in scoring.yaml")
}
