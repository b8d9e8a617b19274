//! Command implementations for audit-cli

pub mod check;
pub mod config;
pub mod parse;

pub use check::run_check;
pub use config::run_config;
pub use parse::run_parse;
