//! Typed property bag attached to every element.
//!
//! Properties arrive from the loader as `name -> value` pairs and keep their
//! declaration order. Getters never coerce between kinds: a string `"3"` is
//! not a float.

use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    String(String),
    Bool(bool),
}

impl PropertyValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value as f32)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Float(value as f32)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a property, returning the previous value.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn float(&self, name: &str, default: f32) -> f32 {
        self.get(name)
            .and_then(PropertyValue::as_float)
            .unwrap_or(default)
    }

    /// Like [`PropertyBag::float`] but truncated toward zero.
    pub fn int(&self, name: &str, default: i32) -> i32 {
        self.get(name)
            .and_then(PropertyValue::as_float)
            .map(|value| value as i32)
            .unwrap_or(default)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_str)
    }

    /// Returns the string value only when it is present and non-empty.
    pub fn non_empty_string(&self, name: &str) -> Option<&str> {
        self.string(name).filter(|value| !value.is_empty())
    }

    pub fn bool(&self, name: &str, default: bool) -> bool {
        self.get(name)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (name, value) in iter {
            bag.set(name, value);
        }
        bag
    }
}
