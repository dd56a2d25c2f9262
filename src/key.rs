//! Collection keys: either an integer index or a string.

use crate::Value;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key in a [`Collection`](crate::Collection): an integer index or a string.
///
/// Integer keys behave like array indices (appending without an explicit key
/// allocates `max(int keys) + 1`); string keys behave like map fields. Keys
/// are unique within a collection and iteration order is insertion order,
/// never key order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Derive a key from a scalar value, using array-key coercion rules:
    /// integers stay integers, floats truncate, booleans become `0`/`1`,
    /// null becomes the empty string, and strings in canonical integer form
    /// become integer keys. Sequences and maps are not keyable.
    pub fn from_value(value: &Value) -> Result<Key> {
        match value {
            Value::Null => Ok(Key::Str(String::new())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Key::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Key::Int(f.trunc() as i64))
                } else {
                    Err(Error::invalid(format!("number {n} is not usable as a key")))
                }
            }
            Value::String(s) => Ok(Key::from_str_coerced(s)),
            Value::Array(_) | Value::Object(_) => Err(Error::invalid(
                "sequences and maps cannot be used as collection keys",
            )),
        }
    }

    /// String-to-key coercion: a string in canonical base-10 integer form
    /// (no leading zeros, no `-0`) becomes an integer key.
    pub(crate) fn from_str_coerced(s: &str) -> Key {
        if let Ok(i) = s.parse::<i64>() {
            if i.to_string() == s {
                return Key::Int(i);
            }
        }
        Key::Str(s.to_string())
    }

    /// The key as a [`Value`], for `keys()` and `flip()`.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::from(*i),
            Key::Str(s) => Value::from(s.clone()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}
