//! Parser for the indentation-sensitive configuration documents of proj-audit.
//!
//! The accepted language is a small block-style subset of YAML: nested
//! mappings, sequences, sequences of mappings, and scalars whose type is
//! inferred from their text (boolean, integer, string).
//!
//! ```
//! use audit_yaml::{Scalar, Value, parse};
//!
//! let doc = parse("Go:\n  extensions:\n    - .go\n").unwrap();
//! let exts = doc.get("Go").and_then(|go| go.get("extensions")).unwrap();
//! assert_eq!(exts, &Value::Sequence(vec![Value::Scalar(Scalar::from(".go"))]));
//! ```
//!
//! Typed configuration is read from the tree through [`FromValue`].

pub mod error;
pub mod parser;
pub mod project;
mod render;
pub mod scalar;
pub mod token;
pub mod value;

pub use error::{Error, Result};
pub use parser::{Parser, parse, parse_tokens};
pub use project::{FromValue, MappingReader, child_path, index_path, project};
pub use scalar::Scalar;
pub use token::{Token, tokenize};
pub use value::{Mapping, Value};
