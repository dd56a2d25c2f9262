//! Construction boundary: every accepted input shape, normalized eagerly.
//!
//! Heterogeneous sources are modeled as a closed set of tagged variants
//! rather than runtime capability sniffing. Each variant has one conversion
//! rule, and [`Collection::from_source`] is the single entry point every
//! `From` impl routes through. The result is always a concrete ordered map
//! with no lazy indirection left.

use crate::collection::Collection;
use crate::error::Result;
use crate::key::Key;
use crate::value::Value;

/// One of the accepted construction inputs.
pub enum Source {
    /// No input: the empty collection.
    Empty,
    /// A single non-container value, wrapped as a one-element sequence.
    /// A null scalar normalizes to the empty collection instead.
    Scalar(Value),
    /// Values in order, keyed sequentially from 0.
    Sequence(Vec<Value>),
    /// Explicit `(key, value)` entries in order.
    Map(Vec<(Key, Value)>),
    /// Another collection; its entries are copied.
    Container(Collection),
    /// A JSON value: objects become keyed entries (object keys in canonical
    /// integer form become integer keys), arrays become sequences, null the
    /// empty collection, and any other scalar a one-element sequence.
    Json(Value),
    /// JSON text, parsed and then treated as [`Source::Json`].
    JsonText(String),
    /// A thunk producing another source, invoked once during normalization.
    Thunk(Box<dyn FnOnce() -> Source>),
}

impl Collection {
    /// Normalize any [`Source`] into a collection. Only [`Source::JsonText`]
    /// (malformed text) and whatever a [`Source::Thunk`] produces can fail.
    pub fn from_source(source: Source) -> Result<Collection> {
        match source {
            Source::Empty => Ok(Collection::new()),
            Source::Scalar(Value::Null) => Ok(Collection::new()),
            Source::Scalar(v) => Ok(Collection::from_values([v])),
            Source::Sequence(values) => Ok(Collection::from_values(values)),
            Source::Map(entries) => Ok(Collection::from_entries(entries)),
            Source::Container(c) => Ok(c),
            Source::Json(v) => Ok(Collection::from_json_value(v)),
            Source::JsonText(text) => {
                let v: Value = serde_json::from_str(&text)?;
                Ok(Collection::from_json_value(v))
            }
            Source::Thunk(f) => Collection::from_source(f()),
        }
    }

    /// Parse JSON text into a collection.
    pub fn from_json_str(text: &str) -> Result<Collection> {
        Collection::from_source(Source::JsonText(text.to_string()))
    }

    fn from_json_value(value: Value) -> Collection {
        match value {
            Value::Null => Collection::new(),
            Value::Array(items) => Collection::from_values(items),
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (Key::from_str_coerced(&k), v))
                .collect(),
            scalar => Collection::from_values([scalar]),
        }
    }
}

impl From<Value> for Collection {
    fn from(value: Value) -> Self {
        Collection::from_json_value(value)
    }
}

impl From<Vec<Value>> for Collection {
    fn from(values: Vec<Value>) -> Self {
        Collection::from_values(values)
    }
}

impl From<Vec<(Key, Value)>> for Collection {
    fn from(entries: Vec<(Key, Value)>) -> Self {
        Collection::from_entries(entries)
    }
}
