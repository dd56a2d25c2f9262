//! Reordering: stable sorts, reversal, seeded shuffling.

use crate::collection::Collection;
use crate::key::Key;
use crate::path::Selector;
use crate::rng::SplitMix64;
use crate::value::{Value, value_cmp};
use std::cmp::Ordering;

impl Collection {
    /// Stable ascending sort by value; keys travel with their values and
    /// ties keep their original relative order.
    #[must_use]
    pub fn sort(&self) -> Collection {
        self.sort_with(value_cmp)
    }

    /// Stable sort with a caller comparator. Stability is enforced
    /// explicitly: entries are paired with their original position and ties
    /// fall back to comparing positions, so the guarantee does not depend
    /// on the underlying sort primitive.
    pub fn sort_with(&self, mut cmp: impl FnMut(&Value, &Value) -> Ordering) -> Collection {
        let mut entries: Vec<(usize, (&Key, &Value))> = self.items.iter().enumerate().collect();
        entries.sort_by(|&(ia, (_, va)), &(ib, (_, vb))| cmp(va, vb).then(ia.cmp(&ib)));
        entries
            .into_iter()
            .map(|(_, (k, v))| (k.clone(), v.clone()))
            .collect()
    }

    /// Stable ascending sort by selector resolution (misses sort as null,
    /// i.e. first).
    pub fn sort_by(&self, selector: impl Into<Selector>) -> Collection {
        self.sort_by_resolved(&selector.into(), false)
    }

    /// Descending [`sort_by`](Collection::sort_by); ties still keep their
    /// original relative order.
    pub fn sort_by_desc(&self, selector: impl Into<Selector>) -> Collection {
        self.sort_by_resolved(&selector.into(), true)
    }

    fn sort_by_resolved(&self, selector: &Selector, descending: bool) -> Collection {
        let mut entries: Vec<(usize, Value, (&Key, &Value))> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, (k, v))| (i, selector.resolve(k, v).unwrap_or(Value::Null), (k, v)))
            .collect();
        entries.sort_by(|(ia, ra, _), (ib, rb, _)| {
            let ord = value_cmp(ra, rb);
            let ord = if descending { ord.reverse() } else { ord };
            ord.then(ia.cmp(ib))
        });
        entries
            .into_iter()
            .map(|(_, _, (k, v))| (k.clone(), v.clone()))
            .collect()
    }

    /// Reverse iteration order; keys travel with their values.
    #[must_use]
    pub fn reverse(&self) -> Collection {
        self.items
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Random permutation of the values, re-keyed sequentially. A given
    /// `seed` makes the permutation deterministic.
    #[must_use]
    pub fn shuffle(&self, seed: Option<u64>) -> Collection {
        let mut rng = match seed {
            Some(s) => SplitMix64::new(s),
            None => SplitMix64::from_entropy(),
        };
        let mut values: Vec<Value> = self.items.values().cloned().collect();
        rng.shuffle(&mut values);
        Collection::from_values(values)
    }
}
