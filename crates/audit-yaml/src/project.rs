//! Projection of a generic [`Value`] tree into typed structures.
//!
//! Every target type implements [`FromValue`] by hand. Struct-shaped targets
//! use a [`MappingReader`] to pull named fields and reject unknown ones.
//! Errors carry a dotted path such as `effort.commit[1].points`.

use std::collections::BTreeMap;

use crate::{Error, Mapping, Result, Scalar, Value};

/// Conversion from a parsed tree node.
pub trait FromValue: Sized {
    /// Convert `value`, found at `path`, into `Self`.
    fn from_value(value: &Value, path: &str) -> Result<Self>;
}

/// Project a whole document into `T`.
pub fn project<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value, "")
}

/// Path of field `key` below `path`.
pub fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Path of item `index` below `path`.
pub fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "document root".to_string()
    } else {
        path.to_string()
    }
}

fn mismatch(path: &str, expected: &'static str, value: &Value) -> Error {
    let found = match value {
        Value::Scalar(s) => format!("{} `{s}`", s.kind()),
        other => other.kind().to_string(),
    };
    Error::shape(display_path(path), expected, found)
}

fn expect_scalar<'v>(value: &'v Value, path: &str, expected: &'static str) -> Result<&'v Scalar> {
    value.as_scalar().ok_or_else(|| mismatch(path, expected, value))
}

impl FromValue for Value {
    fn from_value(value: &Value, _path: &str) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        expect_scalar(value, path, "boolean")?
            .as_bool()
            .ok_or_else(|| mismatch(path, "boolean", value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        expect_scalar(value, path, "integer")?
            .as_int()
            .ok_or_else(|| mismatch(path, "integer", value))
    }
}

macro_rules! int_from_value {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value, path: &str) -> Result<Self> {
                    let n = i64::from_value(value, path)?;
                    <$ty>::try_from(n).map_err(|_| mismatch(path, $expected, value))
                }
            }
        )*
    };
}

int_from_value! {
    i32 => "32-bit integer",
    u32 => "non-negative integer",
    u64 => "non-negative integer",
    usize => "non-negative integer",
}

impl FromValue for String {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        Ok(expect_scalar(value, path, "scalar")?.to_string())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        if value.is_absent() {
            return Ok(Vec::new());
        }
        let items = value
            .as_sequence()
            .ok_or_else(|| mismatch(path, "sequence", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_value(item, &index_path(path, i)))
            .collect()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        if value.is_absent() {
            return Ok(None);
        }
        T::from_value(value, path).map(Some)
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| mismatch(path, "mapping", value))?;
        mapping
            .iter()
            .map(|(key, item)| {
                T::from_value(item, &child_path(path, key)).map(|v| (key.to_string(), v))
            })
            .collect()
    }
}

/// Field-by-field reader over a mapping node.
///
/// Call [`MappingReader::finish`] once all fields are read so that leftover
/// keys are reported as unknown.
#[derive(Debug)]
pub struct MappingReader<'v> {
    mapping: &'v Mapping,
    path: String,
    consumed: Vec<&'v str>,
}

impl<'v> MappingReader<'v> {
    pub fn new(value: &'v Value, path: &str) -> Result<Self> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| mismatch(path, "mapping", value))?;
        Ok(Self {
            mapping,
            path: path.to_string(),
            consumed: Vec::new(),
        })
    }

    fn take(&mut self, key: &'v str) -> Option<&'v Value> {
        let value = self.mapping.get(key)?;
        self.consumed.push(key);
        Some(value)
    }

    /// Read a field that must be present.
    pub fn required<T: FromValue>(&mut self, key: &'v str) -> Result<T> {
        match self.take(key) {
            Some(value) => T::from_value(value, &child_path(&self.path, key)),
            None => Err(Error::MissingField {
                path: display_path(&self.path),
                field: key.to_string(),
            }),
        }
    }

    /// Read a field that may be missing or empty.
    pub fn optional<T: FromValue>(&mut self, key: &'v str) -> Result<Option<T>> {
        match self.take(key) {
            Some(value) => Option::<T>::from_value(value, &child_path(&self.path, key)),
            None => Ok(None),
        }
    }

    /// Read a field, falling back to `T::default()` when missing or empty.
    pub fn or_default<T: FromValue + Default>(&mut self, key: &'v str) -> Result<T> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    /// Fail on the first key that no read consumed.
    pub fn finish(self) -> Result<()> {
        match self.mapping.keys().find(|key| !self.consumed.contains(key)) {
            Some(field) => Err(Error::UnknownField {
                path: display_path(&self.path),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_scalar_projections() {
        let doc = parse("flag: TRUE\ncount: 12\nname: Go\n").unwrap();
        let mut reader = MappingReader::new(&doc, "").unwrap();
        assert!(reader.required::<bool>("flag").unwrap());
        assert_eq!(reader.required::<u32>("count").unwrap(), 12);
        assert_eq!(reader.required::<String>("name").unwrap(), "Go");
        reader.finish().unwrap();
    }

    #[test]
    fn test_string_accepts_any_scalar() {
        let value = Value::Scalar(Scalar::Int(42));
        assert_eq!(String::from_value(&value, "x").unwrap(), "42");
    }

    #[test]
    fn test_integer_rejects_string() {
        let value = Value::Scalar(Scalar::from("1.5"));
        let err = i64::from_value(&value, "effort.commit[0].min").unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                path: "effort.commit[0].min".into(),
                expected: "integer",
                found: "string `1.5`".into(),
            }
        );
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let value = Value::Scalar(Scalar::Int(-1));
        assert!(matches!(
            u32::from_value(&value, "n"),
            Err(Error::ShapeMismatch { expected: "non-negative integer", .. })
        ));
    }

    #[test]
    fn test_absent_projects_to_empty() {
        let absent = Value::empty();
        assert!(Vec::<String>::from_value(&absent, "x").unwrap().is_empty());
        assert_eq!(Option::<i64>::from_value(&absent, "x").unwrap(), None);
    }

    #[test]
    fn test_sequence_where_scalar_expected() {
        let doc = parse("name:\n  - a\n").unwrap();
        let mut reader = MappingReader::new(&doc, "").unwrap();
        let err = reader.required::<String>("name").unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { ref path, .. } if path == "name"));
    }

    #[test]
    fn test_unknown_and_missing_fields() {
        let doc = parse("known: 1\nextra: 2\n").unwrap();
        let mut reader = MappingReader::new(&doc, "rules").unwrap();
        assert_eq!(reader.required::<i64>("known").unwrap(), 1);
        assert!(matches!(
            reader.required::<i64>("absent"),
            Err(Error::MissingField { .. })
        ));
        let err = reader.finish().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownField {
                path: "rules".into(),
                field: "extra".into(),
            }
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(child_path("", "a"), "a");
        assert_eq!(child_path("a", "b"), "a.b");
        assert_eq!(index_path("a.b", 3), "a.b[3]");
    }

    #[test]
    fn test_root_mismatch_path() {
        let doc = parse("- a\n").unwrap();
        let err = BTreeMap::<String, String>::from_value(&doc, "").unwrap_err();
        assert_eq!(err.to_string(), "shape mismatch at document root: expected mapping, found sequence");
    }
}
