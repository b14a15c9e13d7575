//! Tagged-value tree types.

use std::collections::BTreeMap;
use std::fmt;

/// Kind tag of a [`BencValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Dict,
    Array,
    Int,
    Str,
}

impl ValueKind {
    /// Lowercase name used in log messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dict => "dict",
            Self::Array => "array",
            Self::Int => "integer",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the tagged-value tree.
///
/// Each node exclusively owns its children. Strings are raw bytes; use
/// [`BencValue::as_str`] when UTF-8 text is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BencValue {
    Dict(BencDict),
    Array(Vec<BencValue>),
    Int(i64),
    Str(Vec<u8>),
}

impl BencValue {
    /// Get the kind tag of this node.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Dict(_) => ValueKind::Dict,
            Self::Array(_) => ValueKind::Array,
            Self::Int(_) => ValueKind::Int,
            Self::Str(_) => ValueKind::Str,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Str(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the string payload as UTF-8 text.
    ///
    /// Returns `None` for non-string nodes and for byte strings that are
    /// not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn as_dict(&self) -> Option<&BencDict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[BencValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Consume the node and return the dictionary, if it is one.
    pub fn into_dict(self) -> Option<BencDict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<i64> for BencValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for BencValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for BencValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Booleans are stored as integers `0` / `1`.
impl From<bool> for BencValue {
    fn from(value: bool) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for BencValue {
    fn from(value: &str) -> Self {
        Self::Str(value.as_bytes().to_vec())
    }
}

impl From<String> for BencValue {
    fn from(value: String) -> Self {
        Self::Str(value.into_bytes())
    }
}

impl From<Vec<u8>> for BencValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Str(value)
    }
}

impl From<BencDict> for BencValue {
    fn from(value: BencDict) -> Self {
        Self::Dict(value)
    }
}

impl From<Vec<BencValue>> for BencValue {
    fn from(value: Vec<BencValue>) -> Self {
        Self::Array(value)
    }
}

// =============================================================================
// DICTIONARY
// =============================================================================

/// String-keyed dictionary node.
///
/// Keys are kept in byte order, which is the order the bencode grammar
/// requires on output. Encoding two logically identical dictionaries
/// therefore always yields identical bytes, regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BencDict {
    entries: BTreeMap<String, BencValue>,
}

impl BencDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<BencValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&BencValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get an integer value. Returns `None` if absent or of another kind.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(BencValue::as_int)
    }

    /// Get a UTF-8 string value. Returns `None` if absent, of another kind,
    /// or not valid UTF-8.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(BencValue::as_str)
    }

    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.get(key).and_then(BencValue::as_bytes)
    }

    pub fn get_dict(&self, key: &str) -> Option<&BencDict> {
        self.get(key).and_then(BencValue::as_dict)
    }

    pub fn get_array(&self, key: &str) -> Option<&[BencValue]> {
        self.get(key).and_then(BencValue::as_array)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BencValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<BencValue>> FromIterator<(K, V)> for BencDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}
