//! The core ordered key-value container.

use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;

/// An ordered mapping from [`Key`] to [`Value`] with a fluent pipeline of
/// transformation, query, grouping, set and statistics operations.
///
/// Insertion order is iteration order and survives every non-reordering
/// operation. Most operations are pure and build a new `Collection`; the
/// documented mutating subset (`push`, `pop`, `shift`, `pull`, `put`,
/// `forget`, `remove`, `prepend`, `splice`, `transform`) works in place.
///
/// ```
/// use gather::Collection;
/// use serde_json::json;
///
/// let c = Collection::from(json!([1, 2, 3, 4]));
/// let even_doubled = c
///     .filter(|_, v| v.as_i64().is_some_and(|n| n % 2 == 0))
///     .map(|_, v| json!(v.as_i64().unwrap() * 2));
/// assert_eq!(even_doubled.to_value(), json!({"1": 4, "3": 8}));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Collection {
    pub(crate) items: IndexMap<Key, Value>,
}

// Order-sensitive equality: the backing map compares as an unordered set of
// entries, but for an ordered container iteration order is part of the
// value.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items.iter().eq(other.items.iter())
    }
}

impl Collection {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` entries in order. Later duplicates of a key
    /// overwrite the stored value but keep the key's original position.
    pub fn from_entries(entries: impl IntoIterator<Item = (Key, Value)>) -> Self {
        let mut items = IndexMap::new();
        for (k, v) in entries {
            items.insert(k, v);
        }
        Collection { items }
    }

    /// Build from values with sequential integer keys starting at 0.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Collection {
            items: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Int(i as i64), v))
                .collect(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True iff the key is present.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// The value at `key`, or `None` when absent. This is the total
    /// counterpart of the panicking `Index` access.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items.get(&key.into())
    }

    /// The value at `key`, or `default` when absent.
    pub fn get_or(&self, key: impl Into<Key>, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// The value at `key`, or the result of `default` — invoked only on a
    /// miss.
    pub fn get_or_else(&self, key: impl Into<Key>, default: impl FnOnce() -> Value) -> Value {
        match self.get(key) {
            Some(v) => v.clone(),
            None => default(),
        }
    }

    /// Upsert at `key`: replaces the value of an existing key in place (the
    /// key keeps its position), appends at the end otherwise.
    pub fn set(&mut self, key: impl Into<Key>, value: Value) {
        self.items.insert(key.into(), value);
    }

    /// Remove and return the value at `key`, preserving the order of the
    /// remaining entries. No-op returning `None` when absent.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.items.shift_remove(&key.into())
    }

    /// Remove many keys in place; absent keys are ignored. Returns `self`
    /// for chaining.
    pub fn forget<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        for key in keys {
            self.items.shift_remove(&key.into());
        }
        self
    }

    /// The next auto-increment integer key: one past the largest integer key
    /// present, never below 0.
    pub(crate) fn next_index(&self) -> i64 {
        self.items
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |max| max.saturating_add(1).max(0))
    }

    /// Iterate entries in current order. Restartable: each call starts at
    /// the current first entry. Chain `.peekable()` for a current/next
    /// look-ahead view.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.items.iter()
    }

    /// Iterate keys in current order.
    pub fn keys_iter(&self) -> impl Iterator<Item = &Key> {
        self.items.keys()
    }

    /// Iterate values in current order.
    pub fn values_iter(&self) -> impl Iterator<Item = &Value> {
        self.items.values()
    }

    /// Entry at a position in iteration order.
    pub fn get_index(&self, index: usize) -> Option<(&Key, &Value)> {
        self.items.get_index(index)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Collection::from_entries(iter)
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Collection::from_values(iter)
    }
}

impl Extend<(Key, Value)> for Collection {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.items.insert(k, v);
        }
    }
}

// Direct indexed access panics on an absent key with the missing-key
// message; `get`/`get_or` are the total alternatives.
impl std::ops::Index<&Key> for Collection {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        match self.items.get(key) {
            Some(v) => v,
            None => panic!(
                "{}",
                crate::Error::MissingKey {
                    key: key.to_string()
                }
            ),
        }
    }
}

impl std::ops::Index<&str> for Collection {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self[&Key::from(key)]
    }
}

impl std::ops::Index<i64> for Collection {
    type Output = Value;

    fn index(&self, key: i64) -> &Value {
        &self[&Key::Int(key)]
    }
}
