//! Component properties and property merging.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Meta-properties the content compiler attaches to requests. They steer
/// resolution and are never forwarded to an implementation.
pub const RESERVED_PROPS: &[&str] = &["components", "mdxType", "originalType", "parentName"];

/// An ordered property mapping.
///
/// Insertion order is preserved so rendered attribute order is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(IndexMap<String, Value>);

impl Props {
    /// Creates an empty property mapping.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a property, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy without the [`RESERVED_PROPS`].
    #[must_use]
    pub fn without_reserved(&self) -> Self {
        self.0
            .iter()
            .filter(|(k, _)| !RESERVED_PROPS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Removes the `key` property and returns it as node identity.
    /// Non-string keys are stringified.
    pub fn take_key(&mut self) -> Option<String> {
        match self.remove("key")? {
            Value::String(key) => Some(key),
            other => Some(other.to_string()),
        }
    }

    /// Copy fit to be forwarded to an implementation: reserved
    /// meta-properties and `key` removed.
    #[must_use]
    pub fn forwardable(&self) -> Self {
        let mut props = self.without_reserved();
        props.take_key();
        props
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Shallow-merges two property mappings.
///
/// Keys present in both take the `explicit` value. Inherited keys keep
/// their position; explicit-only keys are appended in their own order.
/// Absent sources count as empty.
#[must_use]
pub fn merge_properties(inherited: Option<&Props>, explicit: Option<&Props>) -> Props {
    let mut merged = inherited.cloned().unwrap_or_default();
    if let Some(explicit) = explicit {
        for (key, value) in explicit {
            merged.0.insert(key.clone(), value.clone());
        }
    }
    merged
}
