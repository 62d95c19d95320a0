//! Principal attributes released by the CAS server.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a single released attribute.
///
/// A name that appears once holds a [`AttributeValue::Single`] value. When the
/// server repeats the name, every value is kept, in document order, as
/// [`AttributeValue::Multiple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A single value.
    Single(String),
    /// Several values in document order.
    Multiple(Vec<String>),
}

impl AttributeValue {
    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Returns every value.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Returns true if the attribute holds more than one value.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl PartialEq<&str> for AttributeValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Single(value) if value == other)
    }
}

/// Attribute set keyed by case-sensitive attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, accumulating repeated names into a sequence.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(name.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(AttributeValue::Single(value));
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
        }
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Returns the first value stored under `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(AttributeValue::first)
    }

    /// Returns true if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of distinct attribute names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no attributes were released.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Consumes the set, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, AttributeValue> {
        self.0
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
