//! Effective configuration display

use audit_config::{Config, load_languages_or_default, load_scoring_or_default, merge_language_maps};

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Print the effective configuration as JSON
pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = effective_config(args)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Built-in defaults, then the config file, then the command-line flags.
pub fn effective_config(args: &ConfigArgs) -> Result<Config> {
    let mut config = Config::builtin()?;
    if let Some(path) = &args.config {
        config = config.merge(Config::load(path)?);
    }
    config = config.merge(overrides(args));
    config.disable_analyzers(&args.disable_analyzers);

    if args.fallback {
        if let Some(path) = &config.languages_file {
            let extra = load_languages_or_default(path)?;
            config.languages = merge_language_maps(&config.languages, &extra);
        }
        if let Some(path) = &config.scoring_file {
            config.scoring = Some(load_scoring_or_default(path)?);
        }
    } else {
        config.resolve_languages()?;
        config.resolve_scoring()?;
    }

    config.analyzers = config.effective_analyzers()?;
    config.validate()?;

    tracing::debug!(
        languages = config.languages.len(),
        ignore_dirs = config.ignore_dirs.len(),
        "resolved configuration"
    );
    Ok(config)
}

fn overrides(args: &ConfigArgs) -> Config {
    Config {
        root: args.root.clone().unwrap_or_default(),
        max_depth: args.max_depth.unwrap_or_default(),
        format: args.format.clone().unwrap_or_default(),
        ignore_dirs: args.ignore.clone(),
        include_hidden: args.include_hidden,
        languages_file: args.languages.clone(),
        scoring_file: args.scoring.clone(),
        ..Config::default()
    }
}
