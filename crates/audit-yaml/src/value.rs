//! Generic value tree produced by the parser.

use crate::Scalar;

/// A parsed document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

impl Value {
    /// An empty mapping, the shape of a key with no value.
    pub fn empty() -> Self {
        Value::Mapping(Mapping::new())
    }

    /// Short name of the variant, used in shape errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(_) => "scalar",
        }
    }

    /// Returns `true` for an absent node (empty mapping).
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Mapping(m) if m.is_empty())
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Look up `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

/// An absent node (empty mapping) becomes `null`.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Mapping(m) if m.is_empty() => serde_json::Value::Null,
            Value::Mapping(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::Int(n)) => serde_json::Value::Number((*n).into()),
            Value::Scalar(Scalar::Str(s)) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Insertion-ordered mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous value for `key`.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut m = Mapping::new();
        m.insert("b", Value::from(Scalar::Int(1)));
        m.insert("a", Value::from(Scalar::Int(2)));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut m = Mapping::new();
        m.insert("a", Value::from(Scalar::Int(1)));
        m.insert("b", Value::from(Scalar::Int(2)));
        let old = m.insert("a", Value::from(Scalar::Int(3)));

        assert_eq!(old, Some(Value::from(Scalar::Int(1))));
        assert_eq!(m.len(), 2);
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(m.get("a"), Some(&Value::from(Scalar::Int(3))));
    }

    #[test]
    fn test_absent_node() {
        assert!(Value::empty().is_absent());
        assert!(!Value::Sequence(vec![]).is_absent());
    }

    #[test]
    fn test_to_json() {
        let value: Value = [
            ("name", Value::from(Scalar::from("Go"))),
            ("enabled", Value::from(Scalar::Bool(true))),
            (
                "limits",
                Value::Sequence(vec![Value::from(Scalar::Int(1)), Value::from(Scalar::Int(2))]),
            ),
        ]
        .into_iter()
        .collect::<Mapping>()
        .into();

        let json = serde_json::Value::from(&value);
        assert_eq!(
            json,
            serde_json::json!({"name": "Go", "enabled": true, "limits": [1, 2]})
        );
    }

    #[test]
    fn test_absent_node_to_json_is_null() {
        let value: Value = Mapping::from_iter([("skipDirs", Value::empty())]).into();

        assert_eq!(
            serde_json::Value::from(&value),
            serde_json::json!({"skipDirs": null})
        );
        assert_eq!(serde_json::Value::from(&Value::empty()), serde_json::Value::Null);
    }
}
