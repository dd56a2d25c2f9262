//! Bucketing and positional selection: grouping, chunking, slicing, paging.

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::path::Selector;
use crate::rng::SplitMix64;
use crate::value::Value;
use indexmap::IndexMap;

impl Collection {
    /// Bucket entries into sub-collections keyed by the selector's
    /// resolution. A selector resolving to a sequence puts the entry into
    /// every listed group (multi-group membership). With `preserve_keys`
    /// the buckets retain original keys, otherwise they re-append from 0.
    ///
    /// Group keys follow scalar key coercion; a resolution that is a map is
    /// an invalid-argument error.
    pub fn group_by(
        &self,
        selector: impl Into<Selector>,
        preserve_keys: bool,
    ) -> Result<Collection> {
        let selector = selector.into();
        let mut buckets: IndexMap<Key, Collection> = IndexMap::new();
        for (k, v) in &self.items {
            let resolved = selector.resolve(k, v).unwrap_or(Value::Null);
            let group_keys: Vec<Key> = match resolved {
                Value::Array(groups) => groups
                    .iter()
                    .map(Key::from_value)
                    .collect::<Result<Vec<Key>>>()?,
                other => vec![Key::from_value(&other)?],
            };
            for group in group_keys {
                let bucket = buckets.entry(group).or_default();
                if preserve_keys {
                    bucket.set(k.clone(), v.clone());
                } else {
                    let next = bucket.next_index();
                    bucket.set(next, v.clone());
                }
            }
        }
        Ok(buckets
            .into_iter()
            .map(|(group, bucket)| (group, bucket.to_value()))
            .collect())
    }

    /// Re-key entries by the selector's resolution; on collision the last
    /// entry wins. Same key coercion rules as
    /// [`group_by`](Collection::group_by).
    pub fn key_by(&self, selector: impl Into<Selector>) -> Result<Collection> {
        let selector = selector.into();
        let mut out = Collection::new();
        for (k, v) in &self.items {
            let resolved = selector.resolve(k, v).unwrap_or(Value::Null);
            out.set(Key::from_value(&resolved)?, v.clone());
        }
        Ok(out)
    }

    /// Split into consecutive sub-collections of at most `size` entries,
    /// preserving original keys inside each chunk.
    pub fn chunk(&self, size: usize) -> Result<Collection> {
        if size == 0 {
            return Err(Error::invalid("chunk size must be at least 1"));
        }
        let entries: Vec<(&Key, &Value)> = self.items.iter().collect();
        Ok(Collection::from_values(entries.chunks(size).map(|chunk| {
            chunk
                .iter()
                .map(|(k, v)| ((*k).clone(), (*v).clone()))
                .collect::<Collection>()
                .to_value()
        })))
    }

    /// Divide into `groups` chunks of near-equal size
    /// (`ceil(len / groups)`). An empty collection yields zero chunks, not
    /// `groups` empty ones.
    pub fn split(&self, groups: usize) -> Result<Collection> {
        if groups == 0 {
            return Err(Error::invalid("split requires at least 1 group"));
        }
        if self.is_empty() {
            return Ok(Collection::new());
        }
        self.chunk(self.len().div_ceil(groups))
    }

    /// Keep every `step`-th value by position (not key), starting at
    /// position `offset`. Results re-key from 0.
    pub fn every_nth(&self, step: usize, offset: usize) -> Result<Collection> {
        if step == 0 {
            return Err(Error::invalid("step must be at least 1"));
        }
        Ok(Collection::from_values(
            self.items
                .values()
                .skip(offset)
                .step_by(step)
                .cloned(),
        ))
    }

    /// Slice by position, preserving keys. Negative `offset` counts from
    /// the end; `length` of `None` runs through the end.
    #[must_use]
    pub fn slice(&self, offset: i64, length: Option<usize>) -> Collection {
        let len = self.len();
        let start = if offset < 0 {
            len.saturating_sub(offset.unsigned_abs() as usize)
        } else {
            (offset as usize).min(len)
        };
        let take = length.unwrap_or(len);
        self.items
            .iter()
            .skip(start)
            .take(take)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The `page`-th page (1-based) of `per_page` entries:
    /// `slice((page - 1) * per_page, per_page)`.
    #[must_use]
    pub fn for_page(&self, page: usize, per_page: usize) -> Collection {
        self.slice((page.saturating_sub(1) * per_page) as i64, Some(per_page))
    }

    /// First `limit` entries, or the last `|limit|` when negative. Keys are
    /// preserved.
    #[must_use]
    pub fn take(&self, limit: i64) -> Collection {
        if limit < 0 {
            self.slice(limit, None)
        } else {
            self.slice(0, Some(limit as usize))
        }
    }

    /// `amount` distinct entries chosen uniformly at random, values
    /// re-keyed sequentially in selection order. Fails with an
    /// invalid-argument error when `amount` exceeds the entry count.
    pub fn random(&self, amount: usize) -> Result<Collection> {
        self.random_seeded(amount, None)
    }

    /// [`random`](Collection::random) with a fixed seed for reproducible
    /// selection.
    pub fn random_seeded(&self, amount: usize, seed: Option<u64>) -> Result<Collection> {
        if amount > self.len() {
            return Err(Error::invalid(format!(
                "requested {amount} random entries but the collection only has {}",
                self.len()
            )));
        }
        let mut rng = match seed {
            Some(s) => SplitMix64::new(s),
            None => SplitMix64::from_entropy(),
        };
        let picked = rng.sample_indices(self.len(), amount);
        Ok(Collection::from_values(picked.into_iter().map(|i| {
            self.items
                .get_index(i)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Null)
        })))
    }

    /// One uniformly random value. Fails on an empty collection.
    pub fn random_one(&self) -> Result<Value> {
        let one = self.random(1)?;
        Ok(one.items.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null))
    }
}
