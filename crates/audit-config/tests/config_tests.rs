//! Tests for run configuration loading and merging

use audit_config::{Config, Error, LanguageConfig};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod load_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_json_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "audit.json",
            r#"{
  "root": "~/code",
  "maxDepth": 3,
  "ignoreDirs": ["tmp"],
  "includeHidden": true,
  "analyzers": {"git": false}
}"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.root, "~/code");
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.ignore_dirs, vec!["tmp"]);
        assert!(config.include_hidden);
        assert_eq!(config.analyzers.get("git"), Some(&false));
        assert!(config.format.is_empty());
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_load_category_bounds_with_flat_keys() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "audit.json",
            r#"{"scoring":{"categories":{"product":{"effortMin":10,"polishMin":8}}}}"#,
        );

        let config = Config::load(&path).unwrap();

        let product = config.scoring.unwrap().categories.product;
        assert_eq!(product.effort.min, Some(10));
        assert_eq!(product.polish.min, Some(8));
        assert!(product.commit.is_unbounded());
    }

    #[test]
    fn test_load_rejects_unknown_scoring_keys() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "audit.json",
            r#"{"scoring":{"categories":{"product":{"effort":{"min":10}}}}}"#,
        );

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("effort"));
    }

    #[test]
    fn test_builtin_json_round_trip() {
        let config = Config::builtin().unwrap();
        let json = serde_json::to_string(&config).unwrap();

        let dir = TempDir::new().unwrap();
        let path = write(&dir, "audit.json", &json);

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "audit.json", "{ root: ");

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

mod merge_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = Config::builtin().unwrap();
        let merged = base.clone().merge(Config::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_overrides_win() {
        let base = Config::builtin().unwrap();
        let merged = base.merge(Config {
            root: "/src".into(),
            max_depth: 2,
            format: "json".into(),
            ignore_dirs: vec!["tmp".into(), ".git".into()],
            include_hidden: true,
            ..Config::default()
        });

        assert_eq!(merged.root, "/src");
        assert_eq!(merged.max_depth, 2);
        assert_eq!(merged.format, "json");
        assert!(merged.include_hidden);
        assert_eq!(merged.ignore_dirs.iter().filter(|d| *d == ".git").count(), 1);
        assert_eq!(merged.ignore_dirs.last().map(String::as_str), Some("tmp"));
    }

    #[test]
    fn test_include_hidden_only_turns_on() {
        let base = Config {
            include_hidden: true,
            ..Config::default()
        };
        assert!(base.merge(Config::default()).include_hidden);
    }

    #[test]
    fn test_language_entries_replace_per_name() {
        let base = Config::builtin().unwrap();
        let mut overrides = Config::default();
        overrides.languages.insert(
            "Go".into(),
            LanguageConfig {
                extensions: vec![".go2".into()],
                skip_dirs: vec![],
            },
        );

        let merged = base.merge(overrides);

        assert_eq!(merged.languages["Go"].extensions, vec![".go2"]);
        assert!(merged.languages["Go"].skip_dirs.is_empty());
        assert!(merged.languages.contains_key("Rust"));
    }
}

mod resolve_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_languages_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "languages.yaml",
            "Go:\n  extensions:\n    - .tmpl\nZig:\n  extensions:\n    - .zig\n  skipDirs:\n    - zig-out\n",
        );
        let mut config = Config::builtin().unwrap();
        config.languages_file = Some(path);

        config.resolve_languages().unwrap();

        assert_eq!(config.languages["Go"].extensions, vec![".go", ".tmpl"]);
        assert_eq!(config.extension_mapping()[".zig"], "Zig");
        assert!(config.all_ignore_dirs().contains(&"zig-out".to_string()));
    }

    #[test]
    fn test_resolve_languages_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "languages.yaml", "Go:\n  extensions:\n   - .go\n");
        let mut config = Config::builtin().unwrap();
        config.languages_file = Some(path);

        let err = config.resolve_languages().unwrap_err();

        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("languages file"));
    }

    #[test]
    fn test_resolve_scoring_file_replaces_rules() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scoring.yaml", "polish:\n  readme: 7\n");
        let mut config = Config::builtin().unwrap();
        config.scoring_file = Some(path);

        config.resolve_scoring().unwrap();

        let scoring = config.scoring_or_default().unwrap();
        assert_eq!(scoring.polish.readme, 7);
        assert!(scoring.recency.is_empty());
    }

    #[test]
    fn test_scoring_or_default_without_rules() {
        let config = Config::default();
        let scoring = config.scoring_or_default().unwrap();
        assert_eq!(scoring.recency.len(), 2);
    }

    #[test]
    fn test_builtin_ignore_dirs_include_language_skip_dirs() {
        let config = Config::builtin().unwrap();
        let dirs = config.all_ignore_dirs();

        assert!(dirs.contains(&"obj".to_string()));
        assert!(dirs.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
