//! # Template Context
//!
//! The mapping a handler hands to a template. Keys are strings, values are
//! JSON values so any template engine that speaks `serde` can consume it.
//!
//! ```rust,ignore
//! let ctx = Context::new().with("word", "hello").with("count", 3);
//! ```

use crate::error::ContextError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A string-keyed template context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a context from any value that serializes to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ContextError> {
        Self::try_from(serde_json::to_value(value)?)
    }

    /// Insert a value, returning the previous one for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Unwrap into the underlying JSON map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Context {
    type Error = ContextError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(ContextError::NotAnObject("null")),
            Value::Bool(_) => Err(ContextError::NotAnObject("a boolean")),
            Value::Number(_) => Err(ContextError::NotAnObject("a number")),
            Value::String(_) => Err(ContextError::NotAnObject("a string")),
            Value::Array(_) => Err(ContextError::NotAnObject("an array")),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
