//! Line tokenizer
//!
//! Turns a document into a flat list of content lines, each tagged with its
//! indentation and source line. Blank and comment lines are dropped here so
//! the tree builder only ever sees structure.

use crate::{Error, Result};

/// Prefix that introduces a sequence item.
pub const DASH_MARKER: &str = "- ";

/// One content line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Number of leading spaces.
    pub indent: usize,
    /// The line with surrounding whitespace removed.
    pub text: String,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    /// Returns `true` if this line introduces a sequence item.
    ///
    /// A lone `-` counts too: it is what `- ` looks like once trimmed.
    pub fn is_list_item(&self) -> bool {
        self.text.starts_with(DASH_MARKER) || self.text == "-"
    }

    /// Text after the dash marker, trimmed. Empty for a bare `-`.
    pub fn item_text(&self) -> &str {
        self.text
            .strip_prefix('-')
            .map(str::trim)
            .unwrap_or(&self.text)
    }
}

/// Split `input` into tokens.
///
/// # Errors
///
/// - [`Error::TabIndentation`] if a content line is indented with a tab
/// - [`Error::MalformedIndentation`] if a content line's indentation is odd
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    for (idx, raw) in input.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = idx + 1;
        let indent = leading_indent(line, line_no)?;
        if indent % 2 != 0 {
            return Err(Error::MalformedIndentation {
                line: line_no,
                indent,
            });
        }

        tokens.push(Token {
            indent,
            text: trimmed.to_string(),
            line: line_no,
        });
    }

    Ok(tokens)
}

fn leading_indent(line: &str, line_no: usize) -> Result<usize> {
    let mut count = 0;
    for ch in line.chars() {
        match ch {
            ' ' => count += 1,
            '\t' => return Err(Error::TabIndentation { line: line_no }),
            _ => break,
        }
    }
    Ok(count)
}
