//! Shape-changing transforms: map, flatten, collapse, flip and friends.

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;

impl Collection {
    /// Apply `f` to every entry. Keys are preserved exactly — `map` never
    /// renumbers.
    pub fn map(&self, mut f: impl FnMut(&Key, &Value) -> Value) -> Collection {
        self.items
            .iter()
            .map(|(k, v)| (k.clone(), f(k, v)))
            .collect()
    }

    /// Map each entry to a `(key, value)` pair; pairs are merged in order,
    /// later pairs overwriting earlier ones on key collision.
    pub fn map_with_keys(&self, mut f: impl FnMut(&Key, &Value) -> (Key, Value)) -> Collection {
        self.items.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Map each entry, then collapse the results one level: mapped values
    /// that are sequences or maps contribute their elements, anything else
    /// is dropped. The result is re-keyed sequentially.
    pub fn flat_map(&self, mut f: impl FnMut(&Key, &Value) -> Value) -> Collection {
        Collection::from_values(self.items.iter().map(|(k, v)| f(k, v)))
            .collapse()
    }

    /// In-place [`map`](Collection::map). Returns `self` for chaining.
    pub fn transform(&mut self, f: impl FnMut(&Key, &Value) -> Value) -> &mut Self {
        self.items = self.map(f).items;
        self
    }

    /// Reindex values to sequential integer keys starting at 0, preserving
    /// order.
    #[must_use]
    pub fn values(&self) -> Collection {
        Collection::from_values(self.items.values().cloned())
    }

    /// The keys as a sequentially indexed collection of values.
    #[must_use]
    pub fn keys(&self) -> Collection {
        Collection::from_values(self.items.keys().map(Key::to_value))
    }

    /// Swap keys and values. Every value must itself be usable as a key
    /// (scalar); sequences and maps make the flip an invalid-argument error.
    pub fn flip(&self) -> Result<Collection> {
        let mut out = Collection::new();
        for (k, v) in &self.items {
            out.set(Key::from_value(v)?, k.to_value());
        }
        Ok(out)
    }

    /// Recursively flatten nested sequences and maps into one flat sequence,
    /// discarding keys at every level. `depth` counts levels of nesting
    /// consumed (`1` flattens exactly one level); pass
    /// [`usize::MAX`] for unbounded.
    #[must_use]
    pub fn flatten(&self, depth: usize) -> Collection {
        fn children(v: &Value) -> Option<Vec<Value>> {
            match v {
                Value::Array(items) => Some(items.clone()),
                Value::Object(map) => Some(map.values().cloned().collect()),
                _ => None,
            }
        }

        fn flatten_level(values: Vec<Value>, depth: usize, out: &mut Vec<Value>) {
            for v in values {
                match children(&v) {
                    Some(nested) if depth > 0 => flatten_level(nested, depth - 1, out),
                    _ => out.push(v),
                }
            }
        }

        let mut out = Vec::new();
        flatten_level(self.items.values().cloned().collect(), depth, &mut out);
        Collection::from_values(out)
    }

    /// Merge one level of nested sequences/maps into a single flat
    /// sequence; entries that are neither are skipped silently.
    #[must_use]
    pub fn collapse(&self) -> Collection {
        let mut out = Vec::new();
        for v in self.items.values() {
            match v {
                Value::Array(items) => out.extend(items.iter().cloned()),
                Value::Object(map) => out.extend(map.values().cloned()),
                _ => {}
            }
        }
        Collection::from_values(out)
    }

    /// Zip this collection's values as keys against `values`'s values.
    /// Lengths must match and every key-side value must be scalar.
    pub fn combine(&self, values: &Collection) -> Result<Collection> {
        if self.len() != values.len() {
            return Err(Error::invalid(format!(
                "combine requires equal lengths, got {} keys and {} values",
                self.len(),
                values.len()
            )));
        }
        let mut out = Collection::new();
        for (key_side, value_side) in self.items.values().zip(values.items.values()) {
            out.set(Key::from_value(key_side)?, value_side.clone());
        }
        Ok(out)
    }
}
