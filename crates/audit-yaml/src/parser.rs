//! Recursive-descent tree builder
//!
//! Nesting is reconstructed from indentation alone. Each production
//! (node, mapping, sequence) is a method on [`Parser`] that consumes tokens
//! from a shared cursor and stops as soon as it sees a token that belongs to
//! an enclosing level.

use tracing::debug;

use crate::scalar::strip_quotes;
use crate::token::{Token, tokenize};
use crate::{Error, Mapping, Result, Scalar, Value};

/// Parse a document into a [`Value`] tree.
///
/// An empty document (only blank lines and comments) yields an empty mapping.
///
/// # Errors
///
/// Returns the first tokenizer or structural error, with its source line.
/// No partial tree is returned.
pub fn parse(input: &str) -> Result<Value> {
    let tokens = tokenize(input)?;
    parse_tokens(&tokens)
}

/// Build a tree from an already tokenized document.
pub fn parse_tokens(tokens: &[Token]) -> Result<Value> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_node(0)?;

    // Only a dash line at the root mapping's own indent can be left over.
    if let Some(tok) = parser.peek() {
        return Err(Error::ExpectedKey { line: tok.line });
    }

    debug!(tokens = tokens.len(), root = root.kind(), "parsed document");
    Ok(root)
}

/// Cursor over a token slice.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.index
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Parse whatever starts at the cursor, expecting `indent`.
    ///
    /// Returns an empty mapping when the level has no tokens left.
    pub fn parse_node(&mut self, indent: usize) -> Result<Value> {
        match self.peek() {
            Some(tok) if tok.indent >= indent => {
                if tok.is_list_item() {
                    self.parse_sequence(indent).map(Value::Sequence)
                } else {
                    self.parse_mapping(indent).map(Value::Mapping)
                }
            }
            _ => Ok(Value::empty()),
        }
    }

    /// Parse `key: value` lines sitting exactly at `indent`.
    pub fn parse_mapping(&mut self, indent: usize) -> Result<Mapping> {
        let mut mapping = Mapping::new();

        while let Some(tok) = self.peek() {
            if tok.indent < indent {
                break;
            }
            if tok.indent > indent {
                return Err(Error::UnexpectedIndentation { line: tok.line });
            }
            if tok.is_list_item() {
                break;
            }

            let (key, rest) = match split_entry(&tok.text) {
                Entry::KeyValue { key, rest } => (key, rest),
                Entry::QuotedKeyWithoutColon => {
                    return Err(Error::ExpectedColon { line: tok.line });
                }
                Entry::NoColon => return Err(Error::ExpectedKey { line: tok.line }),
            };
            if key.is_empty() {
                return Err(Error::ExpectedKey { line: tok.line });
            }
            self.advance();

            let value = if rest.is_empty() {
                self.parse_node(indent + 2)?
            } else {
                Value::Scalar(Scalar::classify(rest))
            };
            insert_entry(&mut mapping, key, value, tok.line);
        }

        Ok(mapping)
    }

    /// Parse dash-marked items sitting exactly at `indent`.
    pub fn parse_sequence(&mut self, indent: usize) -> Result<Vec<Value>> {
        let mut items = Vec::new();

        while let Some(tok) = self.peek() {
            if tok.indent < indent {
                break;
            }
            if tok.indent > indent {
                return Err(Error::UnexpectedIndentation { line: tok.line });
            }
            if !tok.is_list_item() {
                return Err(Error::ExpectedListItem { line: tok.line });
            }
            self.advance();

            let text = tok.item_text();
            let item = if text.is_empty() {
                self.parse_node(indent + 2)?
            } else {
                match split_entry(text) {
                    Entry::KeyValue { key, rest } if !key.is_empty() => {
                        Value::Mapping(self.parse_item_mapping(indent, key, rest, tok.line)?)
                    }
                    _ => Value::Scalar(Scalar::classify(text)),
                }
            };
            items.push(item);
        }

        Ok(items)
    }

    /// A sequence item whose first field rides on the dash line.
    ///
    /// The inline key sits at `indent + 2`, so its nested value (if any) is
    /// at `indent + 4` and the remaining fields are siblings at `indent + 2`.
    fn parse_item_mapping(
        &mut self,
        indent: usize,
        key: String,
        rest: &str,
        line: usize,
    ) -> Result<Mapping> {
        let first = if rest.is_empty() {
            self.parse_node(indent + 4)?
        } else {
            Value::Scalar(Scalar::classify(rest))
        };

        let mut mapping = Mapping::new();
        mapping.insert(key, first);

        let extra = self.parse_mapping(indent + 2)?;
        for (key, value) in extra {
            insert_entry(&mut mapping, key, value, line);
        }
        Ok(mapping)
    }
}

fn insert_entry(mapping: &mut Mapping, key: String, value: Value, line: usize) {
    if mapping.contains_key(&key) {
        debug!(line, key = %key, "duplicate key, later value wins");
    }
    mapping.insert(key, value);
}

/// Result of splitting a line into key and remainder.
#[derive(Debug, PartialEq, Eq)]
enum Entry<'t> {
    KeyValue { key: String, rest: &'t str },
    QuotedKeyWithoutColon,
    NoColon,
}

/// Split `text` on the colon that ends its key.
///
/// A key opening with a quote runs to the first matching quote that is
/// followed by a colon, so quoted keys may contain `:`, `#` and either quote
/// character. Otherwise the first colon splits the line.
fn split_entry(text: &str) -> Entry<'_> {
    if let Some(quote) = text.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &text[1..];
        for (close, _) in body.match_indices(quote) {
            if let Some(rest) = body[close + 1..].trim_start().strip_prefix(':') {
                return Entry::KeyValue {
                    key: body[..close].to_string(),
                    rest: rest.trim(),
                };
            }
        }
        if body.contains(quote) {
            return Entry::QuotedKeyWithoutColon;
        }
    }

    match text.split_once(':') {
        Some((key, rest)) => {
            let key = key.trim();
            Entry::KeyValue {
                key: strip_quotes(key).unwrap_or(key).to_string(),
                rest: rest.trim(),
            }
        }
        None => Entry::NoColon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kv(key: &str, rest: &'static str) -> Entry<'static> {
        Entry::KeyValue {
            key: key.to_string(),
            rest,
        }
    }

    #[test]
    fn test_split_entry_plain() {
        assert_eq!(split_entry("name: value"), kv("name", "value"));
        assert_eq!(split_entry("name:"), kv("name", ""));
        assert_eq!(split_entry("url: http://x"), kv("url", "http://x"));
        assert_eq!(split_entry("plain"), Entry::NoColon);
    }

    #[test]
    fn test_split_entry_quoted_key() {
        assert_eq!(split_entry("\"C#\":"), kv("C#", ""));
        assert_eq!(split_entry("'a:b': 1"), kv("a:b", "1"));
        assert_eq!(split_entry("\"C/C++\"  : x"), kv("C/C++", "x"));
        assert_eq!(split_entry("\"C#\" extensions"), Entry::QuotedKeyWithoutColon);
        assert_eq!(split_entry("\"quoted\""), Entry::QuotedKeyWithoutColon);
    }

    #[test]
    fn test_split_entry_unterminated_quote_falls_back() {
        assert_eq!(split_entry("\"abc: d"), kv("\"abc", "d"));
    }

    #[test]
    fn test_split_entry_quoted_key_holding_quotes() {
        assert_eq!(split_entry("\"\"x'\": 1"), kv("\"x'", "1"));
        assert_eq!(split_entry("'it's': yes"), kv("it's", "yes"));
        assert_eq!(split_entry("'x\": y''"), Entry::QuotedKeyWithoutColon);
    }

    #[test]
    fn test_parser_position_tracks_consumed_tokens() {
        let tokens = tokenize("a: 1\nb:\n  c: 2\n").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.parse_node(0).unwrap();
        assert_eq!(parser.position(), 3);
    }

    #[test]
    fn test_nested_child_stops_at_parent_level() {
        let tokens = tokenize("a:\n  b: 1\nc: 2\n").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.advance();
        let child = parser.parse_node(2).unwrap();
        assert_eq!(child.get("b"), Some(&Value::Scalar(Scalar::Int(1))));
        assert_eq!(parser.position(), 2);
    }
}
