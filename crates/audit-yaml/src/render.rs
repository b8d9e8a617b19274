//! Re-serialization of a [`Value`] tree in the same block grammar.
//!
//! Output preserves mapping insertion order. Strings that would be read back
//! as something else are quoted, so parsing the rendered text reproduces the
//! tree, except for empty sequences (rendered like an absent value), strings
//! containing line breaks, and strings where both `"` and `'` appear directly
//! before a colon (no quote character can wrap them).

use std::fmt::{self, Write as _};

use crate::{Mapping, Scalar, Value};

impl Value {
    /// Render this tree as a document.
    pub fn to_yaml(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_root(&mut out, self);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_root(f, self)
    }
}

fn write_root(out: &mut impl fmt::Write, value: &Value) -> fmt::Result {
    match value {
        Value::Mapping(m) => write_mapping(out, m, 0),
        Value::Sequence(items) => write_sequence(out, items, 0),
        Value::Scalar(s) => writeln!(out, "{}", render_scalar(s)),
    }
}

fn write_mapping(out: &mut impl fmt::Write, mapping: &Mapping, indent: usize) -> fmt::Result {
    for (key, value) in mapping.iter() {
        write!(out, "{:indent$}{}:", "", render_key(key))?;
        write_entry_value(out, value, indent + 2)?;
    }
    Ok(())
}

/// Finish a `key:` line; nested collections go below at `child_indent`.
fn write_entry_value(out: &mut impl fmt::Write, value: &Value, child_indent: usize) -> fmt::Result {
    match value {
        Value::Scalar(s) => writeln!(out, " {}", render_scalar(s)),
        Value::Mapping(m) => {
            writeln!(out)?;
            write_mapping(out, m, child_indent)
        }
        Value::Sequence(items) => {
            writeln!(out)?;
            write_sequence(out, items, child_indent)
        }
    }
}

fn write_sequence(out: &mut impl fmt::Write, items: &[Value], indent: usize) -> fmt::Result {
    for item in items {
        match item {
            Value::Scalar(s) => writeln!(out, "{:indent$}- {}", "", render_scalar(s))?,
            Value::Sequence(nested) => {
                writeln!(out, "{:indent$}-", "")?;
                write_sequence(out, nested, indent + 2)?;
            }
            Value::Mapping(m) => {
                let mut entries = m.iter();
                match entries.next() {
                    None => writeln!(out, "{:indent$}-", "")?,
                    Some((key, value)) => {
                        write!(out, "{:indent$}- {}:", "", render_key(key))?;
                        write_entry_value(out, value, indent + 4)?;
                        for (key, value) in entries {
                            write!(out, "{:width$}{}:", "", render_key(key), width = indent + 2)?;
                            write_entry_value(out, value, indent + 4)?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn render_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Str(s) if needs_quotes(s) => quote(s),
        other => other.to_string(),
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.trim() != s
        || s.contains(':')
        || s.starts_with(['#', '"', '\''])
        || Scalar::classify(s) != Scalar::Str(s.to_string())
}

fn render_key(key: &str) -> String {
    let plain = !key.is_empty()
        && key.trim() == key
        && !key.contains(':')
        && !key.starts_with(['#', '"', '\'', '-']);
    if plain { key.to_string() } else { quote(key) }
}

/// Wrap `s` in quotes that the key splitter will not end early.
///
/// Prefers a quote character absent from `s`. Otherwise picks one that is
/// never followed by a colon inside `s`.
fn quote(s: &str) -> String {
    const QUOTES: [char; 2] = ['"', '\''];
    let closes_early =
        |q: char| s.match_indices(q).any(|(i, _)| s[i + 1..].trim_start().starts_with(':'));
    let q = QUOTES
        .into_iter()
        .find(|q| !s.contains(*q))
        .or_else(|| QUOTES.into_iter().find(|q| !closes_early(*q)))
        .unwrap_or('"');
    format!("{q}{s}{q}")
}
