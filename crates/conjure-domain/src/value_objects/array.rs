//! Structured collections and argument bags
//!
//! The host's single collection type is an insertion-ordered map whose keys
//! are either positions or names. The same shape is used for loosely-typed
//! argument bags, so a bag can mix `{0: 3, "y": 4}` freely.

use std::fmt;

use indexmap::IndexMap;

use super::value::Value;

/// Key of an [`Array`] entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    /// 0-based position
    Index(usize),
    /// Name (parameter name, record field)
    Name(String),
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Insertion-ordered map of positions/names to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    entries: IndexMap<ArrayKey, Value>,
}

/// A loosely-typed input keyed by parameter name and/or position
pub type ArgumentBag = Array;

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list keyed `0..n`
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().collect()
    }

    /// Builder-style insert
    pub fn with<K: Into<ArrayKey>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry, returning the previous value
    pub fn insert<K: Into<ArrayKey>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Append under the next free position (one past the highest index)
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        let next = self
            .entries
            .keys()
            .filter_map(|key| match key {
                ArrayKey::Index(index) => Some(index + 1),
                ArrayKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.entries.insert(ArrayKey::Index(next), value.into());
    }

    /// Look up an entry
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up an entry by name
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.entries.get(&ArrayKey::Name(name.to_string()))
    }

    /// Look up an entry by position
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.entries.get(&ArrayKey::Index(index))
    }

    /// Whether the key is present (even when its value is null)
    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.entries.keys()
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .enumerate()
                .map(|(index, value)| (ArrayKey::Index(index), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = (ArrayKey, Value);
    type IntoIter = indexmap::map::IntoIter<ArrayKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
