//! Parsed front-matter value representation.

use hashlink::LinkedHashMap;

/// A parsed front-matter value.
///
/// The current grammar only ever produces `Scalar` and `Sequence` entries,
/// one per top-level key. `Mapping` is the reserved shape for nested
/// `key: value` blocks; the parser recognizes the construct and rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A `key: value` line.
    Scalar { key: String, value: String },
    /// A key followed by an indented block of dash-prefixed items.
    Sequence { key: String, items: Vec<String> },
    /// An ordered key-to-value association. Keys are unique and iteration
    /// follows insertion order. Never constructed by the current grammar.
    Mapping(LinkedHashMap<String, Value>),
}

impl Value {
    /// Returns the entry's key, or `None` for a `Mapping`.
    pub fn key(&self) -> Option<&str> {
        match self {
            Value::Scalar { key, .. } | Value::Sequence { key, .. } => Some(key),
            Value::Mapping(_) => None,
        }
    }

    /// Returns the scalar text if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the item list if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Returns the underlying map if this is a `Mapping`.
    pub fn as_mapping(&self) -> Option<&LinkedHashMap<String, Value>> {
        match self {
            Value::Mapping(fields) => Some(fields),
            _ => None,
        }
    }
}
