//! Statistics over values or selector resolutions.
//!
//! Numeric folds (`sum`, `avg`, `median`) consider values with a numeric
//! view (numbers and numeric strings); everything else — including entries
//! whose selector misses — is excluded rather than coerced. `min`/`max`
//! fold with a null-aware comparison; `mode` buckets by loose equality.

use crate::collection::Collection;
use crate::path::Selector;
use crate::value::{Value, as_number, loose_eq, value_cmp};
use ordered_float::OrderedFloat;

impl Collection {
    /// Sum of the numeric values. `0.0` on an empty collection.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum_by(Selector::func(|_, v| v.clone()))
    }

    /// Sum over selector resolutions.
    pub fn sum_by(&self, selector: impl Into<Selector>) -> f64 {
        self.numeric_resolutions(&selector.into()).into_iter().sum()
    }

    /// Arithmetic mean of the numeric values; `None` when none qualify.
    #[must_use]
    pub fn avg(&self) -> Option<f64> {
        self.avg_by(Selector::func(|_, v| v.clone()))
    }

    /// Mean over selector resolutions.
    pub fn avg_by(&self, selector: impl Into<Selector>) -> Option<f64> {
        let numbers = self.numeric_resolutions(&selector.into());
        if numbers.is_empty() {
            return None;
        }
        Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
    }

    /// Alias for [`avg`](Collection::avg).
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.avg()
    }

    /// Smallest value under the total value order, nulls skipped. `None`
    /// when empty or all-null.
    #[must_use]
    pub fn min(&self) -> Option<Value> {
        self.min_by(Selector::func(|_, v| v.clone()))
    }

    /// Minimum over selector resolutions.
    pub fn min_by(&self, selector: impl Into<Selector>) -> Option<Value> {
        self.resolutions(&selector.into())
            .into_iter()
            .filter(|v| !v.is_null())
            .min_by(value_cmp)
    }

    /// Largest value under the total value order, nulls skipped.
    #[must_use]
    pub fn max(&self) -> Option<Value> {
        self.max_by(Selector::func(|_, v| v.clone()))
    }

    /// Maximum over selector resolutions.
    pub fn max_by(&self, selector: impl Into<Selector>) -> Option<Value> {
        // max_by keeps the last of equal elements; fold keeps the first
        // non-null candidate on ties instead.
        let mut best: Option<Value> = None;
        for v in self.resolutions(&selector.into()) {
            if v.is_null() {
                continue;
            }
            match &best {
                Some(b) if value_cmp(&v, b) != std::cmp::Ordering::Greater => {}
                _ => best = Some(v),
            }
        }
        best
    }

    /// Median of the numeric values: middle element for odd counts, mean of
    /// the two middle elements for even counts. `None` when none qualify.
    #[must_use]
    pub fn median(&self) -> Option<f64> {
        self.median_by(Selector::func(|_, v| v.clone()))
    }

    /// Median over selector resolutions.
    pub fn median_by(&self, selector: impl Into<Selector>) -> Option<f64> {
        let mut numbers: Vec<OrderedFloat<f64>> = self
            .numeric_resolutions(&selector.into())
            .into_iter()
            .map(OrderedFloat)
            .collect();
        if numbers.is_empty() {
            return None;
        }
        numbers.sort();
        let mid = numbers.len() / 2;
        if numbers.len() % 2 == 1 {
            Some(numbers[mid].0)
        } else {
            Some((numbers[mid - 1].0 + numbers[mid].0) / 2.0)
        }
    }

    /// The most frequent value(s) under loose equality, sorted ascending by
    /// the total value order. `None` when the collection is empty.
    #[must_use]
    pub fn mode(&self) -> Option<Vec<Value>> {
        self.mode_by(Selector::func(|_, v| v.clone()))
    }

    /// Mode over selector resolutions; entries whose selector misses are
    /// excluded, null resolutions are counted.
    pub fn mode_by(&self, selector: impl Into<Selector>) -> Option<Vec<Value>> {
        let selector = selector.into();
        let mut buckets: Vec<(Value, usize)> = Vec::new();
        for (k, v) in &self.items {
            let Some(resolved) = selector.resolve(k, v) else {
                continue;
            };
            match buckets.iter_mut().find(|entry| loose_eq(&entry.0, &resolved)) {
                Some(entry) => entry.1 += 1,
                None => buckets.push((resolved, 1)),
            }
        }
        let top = buckets.iter().map(|(_, c)| *c).max()?;
        let mut winners: Vec<Value> = buckets
            .into_iter()
            .filter(|(_, c)| *c == top)
            .map(|(v, _)| v)
            .collect();
        winners.sort_by(value_cmp);
        Some(winners)
    }

    fn resolutions(&self, selector: &Selector) -> Vec<Value> {
        self.items
            .iter()
            .filter_map(|(k, v)| selector.resolve(k, v))
            .collect()
    }

    fn numeric_resolutions(&self, selector: &Selector) -> Vec<f64> {
        self.items
            .iter()
            .filter_map(|(k, v)| selector.resolve(k, v))
            .filter_map(|v| as_number(&v))
            .collect()
    }
}
