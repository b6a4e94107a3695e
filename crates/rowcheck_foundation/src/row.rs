//! Record instances keyed by field name.

use std::fmt;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One record instance, either persisted or in-progress edit state.
///
/// A field is *nullish* when it is missing or holds [`Value::Nil`].
/// Cloning is O(1); rows share structure through a persistent map.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DataRow(OrdMap<String, Value>);

impl DataRow {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self(OrdMap::new())
    }

    /// Returns the row with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Sets `field` to `value`, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Returns the stored value, including an explicit nil.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the stored value unless it is nullish.
    #[must_use]
    pub fn get_present(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_nil())
    }

    /// Returns true if the field is a key of this row, even when nil.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns true if the field is nullish or blank after trimming.
    #[must_use]
    pub fn is_blank(&self, field: &str) -> bool {
        self.0.get(field).is_none_or(Value::is_blank)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for DataRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for DataRow
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for DataRow
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.0.insert(k.into(), v.into());
        }
    }
}
