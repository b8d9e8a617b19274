//! Generic tree dump

use std::fs;
use std::path::Path;

use crate::error::{CliError, Result};

/// Parse `file` and print the tree, re-rendered or as JSON
pub fn run_parse(file: &Path, json: bool) -> Result<()> {
    let text = fs::read_to_string(file).map_err(|e| CliError::io(file, e))?;
    let value = audit_yaml::parse(&text)?;

    if json {
        let json = serde_json::Value::from(&value);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{value}");
    }
    Ok(())
}
