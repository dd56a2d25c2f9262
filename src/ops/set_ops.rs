//! Two-collection algebra: merge/union precedence, differences,
//! intersection, key selection, zipping and plucking.

use crate::collection::Collection;
use crate::error::Result;
use crate::key::Key;
use crate::path;
use crate::value::{Value, display_string, loose_eq};

impl Collection {
    /// Merge `other` over this collection: on key collision the incoming
    /// entry wins; non-colliding keys from both sides are kept.
    #[must_use]
    pub fn merge(&self, other: &Collection) -> Collection {
        let mut out = self.clone();
        for (k, v) in &other.items {
            out.set(k.clone(), v.clone());
        }
        out
    }

    /// Union with `other`: on key collision the existing entry wins — the
    /// exact opposite precedence of [`merge`](Collection::merge).
    #[must_use]
    pub fn union(&self, other: &Collection) -> Collection {
        let mut out = self.clone();
        for (k, v) in &other.items {
            if !out.items.contains_key(k) {
                out.set(k.clone(), v.clone());
            }
        }
        out
    }

    /// Entries whose value does not appear (loosely) among `other`'s
    /// values.
    #[must_use]
    pub fn diff(&self, other: &Collection) -> Collection {
        self.filter(|_, v| !other.items.values().any(|o| loose_eq(o, v)))
    }

    /// Entries whose key is absent from `other`.
    #[must_use]
    pub fn diff_keys(&self, other: &Collection) -> Collection {
        self.filter(|k, _| !other.items.contains_key(k))
    }

    /// Entries whose value appears (loosely) among `other`'s values, keyed
    /// as in this collection.
    #[must_use]
    pub fn intersect(&self, other: &Collection) -> Collection {
        self.filter(|_, v| other.items.values().any(|o| loose_eq(o, v)))
    }

    /// Keep only the given keys, in this collection's order.
    pub fn only<I>(&self, keys: I) -> Collection
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let wanted: Vec<Key> = keys.into_iter().map(Into::into).collect();
        self.filter(|k, _| wanted.contains(k))
    }

    /// Drop the given keys.
    pub fn except<I>(&self, keys: I) -> Collection
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let dropped: Vec<Key> = keys.into_iter().map(Into::into).collect();
        self.filter(|k, _| !dropped.contains(k))
    }

    /// Element-wise combination of this collection's values with each of
    /// `others` at the same position, into per-position sub-sequences.
    /// Shorter collections pad with null; the result has this collection's
    /// length.
    #[must_use]
    pub fn zip(&self, others: &[&Collection]) -> Collection {
        Collection::from_values(self.items.values().enumerate().map(|(i, v)| {
            let mut tuple = vec![v.clone()];
            for other in others {
                tuple.push(
                    other
                        .items
                        .get_index(i)
                        .map(|(_, ov)| ov.clone())
                        .unwrap_or(Value::Null),
                );
            }
            Value::Array(tuple)
        }))
    }

    /// Extract `value_path` from every entry into a sequential collection.
    /// Entries where the path misses contribute null. Wildcard segments fan
    /// out per [`path::resolve`](crate::path::resolve).
    #[must_use]
    pub fn pluck(&self, value_path: &str) -> Collection {
        Collection::from_values(
            self.items
                .values()
                .map(|v| path::resolve(v, value_path).unwrap_or(Value::Null)),
        )
    }

    /// [`pluck`](Collection::pluck), keyed by each entry's `key_path`
    /// resolution instead of a sequential index. Later duplicates of a key
    /// overwrite earlier ones.
    pub fn pluck_keyed(&self, value_path: &str, key_path: &str) -> Result<Collection> {
        let mut out = Collection::new();
        for v in self.items.values() {
            let plucked = path::resolve(v, value_path).unwrap_or(Value::Null);
            let key_value = path::resolve(v, key_path).unwrap_or(Value::Null);
            out.set(Key::from_value(&key_value)?, plucked);
        }
        Ok(out)
    }

    /// Join scalar values directly with `glue`.
    #[must_use]
    pub fn implode(&self, glue: &str) -> String {
        self.items
            .values()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(glue)
    }

    /// Resolve `value_path` per entry, then join with `glue`.
    #[must_use]
    pub fn implode_by(&self, value_path: &str, glue: &str) -> String {
        self.items
            .values()
            .map(|v| display_string(&path::resolve(v, value_path).unwrap_or(Value::Null)))
            .collect::<Vec<_>>()
            .join(glue)
    }
}
