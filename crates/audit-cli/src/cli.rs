//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// proj-audit - Inspect and validate audit configuration
#[derive(Parser, Debug)]
#[command(name = "proj-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration as JSON
    ///
    /// Built-in defaults, then the config file, then the flags below.
    ///
    /// Examples:
    ///   proj-audit config --root ~/code --max-depth 2
    ///   proj-audit config --languages langs.yaml --disable-analyzers git
    Config(ConfigArgs),

    /// Validate a configuration document
    Check {
        /// Document to validate
        file: PathBuf,

        /// Document type; `auto` guesses from the file name
        #[arg(short, long, value_enum, default_value_t = DocumentKind::Auto)]
        kind: DocumentKind,
    },

    /// Parse a document and print the tree
    Parse {
        /// Document to parse
        file: PathBuf,

        /// Print as JSON instead of re-rendering
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    /// JSON run configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Languages document merged over the built-in table
    #[arg(long)]
    pub languages: Option<PathBuf>,

    /// Scoring document replacing the built-in rules
    #[arg(long)]
    pub scoring: Option<PathBuf>,

    /// Directory to scan
    #[arg(long)]
    pub root: Option<String>,

    /// Maximum scan depth (0 = unlimited)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Output format (tree, markdown, json)
    #[arg(long)]
    pub format: Option<String>,

    /// Extra directory names to ignore
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Scan dot-prefixed directories
    #[arg(long)]
    pub include_hidden: bool,

    /// Analyzers to turn off (git, fs, lang)
    #[arg(long, value_delimiter = ',')]
    pub disable_analyzers: Vec<String>,

    /// Use built-in documents when a languages or scoring file is unusable
    #[arg(long)]
    pub fallback: bool,
}

/// Kinds of document `check` understands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Auto,
    Languages,
    Analyzers,
    Scoring,
    Generic,
}
