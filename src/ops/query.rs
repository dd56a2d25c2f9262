//! Scanning queries and reductions: first/last, membership, search, fold.

use crate::collection::Collection;
use crate::key::Key;
use crate::path;
use crate::value::{Value, loose_eq};

impl Collection {
    /// First value, or `None` when empty.
    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, v)| v)
    }

    /// First value whose entry satisfies the predicate.
    pub fn first_where(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Option<&Value> {
        self.items
            .iter()
            .find(|&(k, v)| pred(k, v))
            .map(|(_, v)| v)
    }

    /// Last value, or `None` when empty.
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, v)| v)
    }

    /// Last value whose entry satisfies the predicate (scans in reverse).
    pub fn last_where(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Option<&Value> {
        self.items
            .iter()
            .rev()
            .find(|&(k, v)| pred(k, v))
            .map(|(_, v)| v)
    }

    /// Loose membership test over values.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.values().any(|v| loose_eq(v, value))
    }

    /// Strict membership test over values.
    pub fn contains_strict(&self, value: &Value) -> bool {
        self.items.values().any(|v| v == value)
    }

    /// True iff some entry satisfies the predicate.
    pub fn contains_where(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> bool {
        self.items.iter().any(|(k, v)| pred(k, v))
    }

    /// True iff some entry's value, resolved through `path`, loosely equals
    /// `value`.
    pub fn contains_at(&self, p: &str, value: &Value) -> bool {
        self.items
            .values()
            .any(|v| path::resolve(v, p).is_some_and(|r| loose_eq(&r, value)))
    }

    /// Strict variant of [`contains_at`](Collection::contains_at).
    pub fn contains_at_strict(&self, p: &str, value: &Value) -> bool {
        self.items
            .values()
            .any(|v| path::resolve(v, p).is_some_and(|r| r == *value))
    }

    /// Key of the first value loosely equal to `value`. `None` is the
    /// not-found sentinel, distinct from any legitimate key.
    pub fn search(&self, value: &Value) -> Option<Key> {
        self.items
            .iter()
            .find(|&(_, v)| loose_eq(v, value))
            .map(|(k, _)| k.clone())
    }

    /// Strict variant of [`search`](Collection::search).
    pub fn search_strict(&self, value: &Value) -> Option<Key> {
        self.items
            .iter()
            .find(|&(_, v)| v == value)
            .map(|(k, _)| k.clone())
    }

    /// Key of the first entry satisfying the predicate.
    pub fn search_where(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Option<Key> {
        self.items
            .iter()
            .find(|&(k, v)| pred(k, v))
            .map(|(k, _)| k.clone())
    }

    /// Left fold over entries in iteration order.
    pub fn reduce<T>(&self, init: T, mut f: impl FnMut(T, &Key, &Value) -> T) -> T {
        let mut acc = init;
        for (k, v) in &self.items {
            acc = f(acc, k, v);
        }
        acc
    }

    /// Apply `f` to the whole collection and return its result verbatim.
    /// Escape hatch for ad hoc composition mid-chain.
    pub fn pipe<T>(&self, f: impl FnOnce(&Collection) -> T) -> T {
        f(self)
    }
}
