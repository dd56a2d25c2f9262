//! The mutating subset: stack/queue ends, keyed pulls, prepend, splice.

use crate::collection::Collection;
use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;

impl Collection {
    /// New collection with `value` appended under the next auto-increment
    /// integer key.
    #[must_use]
    pub fn append(&self, value: Value) -> Collection {
        let mut out = self.clone();
        out.push(value);
        out
    }

    /// New collection with `value` upserted at `key`.
    pub fn append_keyed(&self, key: impl Into<Key>, value: Value) -> Collection {
        let mut out = self.clone();
        out.set(key, value);
        out
    }

    /// Append in place under the next auto-increment integer key.
    pub fn push(&mut self, value: Value) -> &mut Self {
        let next = self.next_index();
        self.items.insert(Key::Int(next), value);
        self
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop().map(|(_, v)| v)
    }

    /// Remove and return the first value, preserving the order of the rest.
    pub fn shift(&mut self) -> Option<Value> {
        self.items.shift_remove_index(0).map(|(_, v)| v)
    }

    /// Remove and return the value at `key`.
    pub fn pull(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.remove(key)
    }

    /// Remove and return the value at `key`, or `default` when absent.
    pub fn pull_or(&mut self, key: impl Into<Key>, default: Value) -> Value {
        self.remove(key).unwrap_or(default)
    }

    /// Upsert in place; alias of [`set`](Collection::set) returning `self`
    /// for chaining.
    pub fn put(&mut self, key: impl Into<Key>, value: Value) -> &mut Self {
        self.set(key, value);
        self
    }

    /// Insert `value` at the front. Integer keys are renumbered
    /// sequentially from 0 (the new value takes 0); string keys are
    /// untouched.
    pub fn prepend(&mut self, value: Value) -> &mut Self {
        let mut items = IndexMap::new();
        let mut next = 0i64;
        items.insert(Key::Int(next), value);
        next += 1;
        for (k, v) in self.items.drain(..) {
            match k {
                Key::Int(_) => {
                    items.insert(Key::Int(next), v);
                    next += 1;
                }
                Key::Str(_) => {
                    items.insert(k, v);
                }
            }
        }
        self.items = items;
        self
    }

    /// Insert `value` at the front under an explicit key. An existing entry
    /// under the same key is dropped in favor of the new front entry; no
    /// renumbering happens.
    pub fn prepend_keyed(&mut self, key: impl Into<Key>, value: Value) -> &mut Self {
        let key = key.into();
        let mut items = IndexMap::new();
        items.insert(key.clone(), value);
        for (k, v) in self.items.drain(..) {
            if k != key {
                items.insert(k, v);
            }
        }
        self.items = items;
        self
    }

    /// Remove `length` values starting at `offset` (through the end when
    /// `None`), insert `replacement` in their place, and renumber the
    /// collection sequentially. Negative `offset` counts from the end.
    /// Returns the removed values as a new collection.
    pub fn splice(
        &mut self,
        offset: i64,
        length: Option<usize>,
        replacement: Vec<Value>,
    ) -> Collection {
        let len = self.len();
        let start = if offset < 0 {
            len.saturating_sub(offset.unsigned_abs() as usize)
        } else {
            (offset as usize).min(len)
        };
        let remove = length.unwrap_or(len - start).min(len - start);

        let mut values: Vec<Value> = self.items.drain(..).map(|(_, v)| v).collect();
        let removed: Vec<Value> = values.splice(start..start + remove, replacement).collect();
        self.items = Collection::from_values(values).items;
        Collection::from_values(removed)
    }
}
