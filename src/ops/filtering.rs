//! Entry filtering: predicates, `where` comparisons, rejection, uniqueness.

use crate::collection::Collection;
use crate::key::Key;
use crate::path::{self, Selector};
use crate::value::{Value, is_truthy, loose_cmp, loose_eq};
use std::cmp::Ordering;

/// Comparison operator for [`where_by`](Collection::where_by). Parsed from
/// the conventional operator spellings; anything unrecognized is treated as
/// loose equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    EqStrict,
    Ne,
    NeStrict,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    /// Parse `=`, `==`, `===`, `!=`, `<>`, `!==`, `<`, `<=`, `>`, `>=`.
    #[must_use]
    pub fn parse(op: &str) -> CmpOp {
        match op {
            "===" => CmpOp::EqStrict,
            "!=" | "<>" => CmpOp::Ne,
            "!==" => CmpOp::NeStrict,
            "<" => CmpOp::Lt,
            "<=" => CmpOp::Le,
            ">" => CmpOp::Gt,
            ">=" => CmpOp::Ge,
            _ => CmpOp::Eq,
        }
    }

    fn matches(self, left: &Value, right: &Value) -> bool {
        match self {
            CmpOp::Eq => loose_eq(left, right),
            CmpOp::EqStrict => left == right,
            CmpOp::Ne => !loose_eq(left, right),
            CmpOp::NeStrict => left != right,
            CmpOp::Lt => loose_cmp(left, right) == Some(Ordering::Less),
            CmpOp::Gt => loose_cmp(left, right) == Some(Ordering::Greater),
            CmpOp::Le => matches!(loose_cmp(left, right), Some(Ordering::Less | Ordering::Equal)),
            CmpOp::Ge => matches!(
                loose_cmp(left, right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

impl Collection {
    /// Keep entries satisfying the predicate. Surviving entries keep their
    /// keys and relative order.
    pub fn filter(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Collection {
        self.items
            .iter()
            .filter(|&(k, v)| pred(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The no-predicate filter: keep entries whose value is loosely truthy.
    pub fn filter_truthy(&self) -> Collection {
        self.filter(|_, v| is_truthy(v))
    }

    /// Drop entries satisfying the predicate.
    pub fn reject(&self, mut pred: impl FnMut(&Key, &Value) -> bool) -> Collection {
        self.filter(|k, v| !pred(k, v))
    }

    /// Drop entries whose value loosely equals `value`.
    pub fn reject_value(&self, value: &Value) -> Collection {
        self.reject(|_, v| loose_eq(v, value))
    }

    /// Keep entries whose value, resolved through the dot-path, compares
    /// true against `value` under `op` (see [`CmpOp::parse`]). A path miss
    /// resolves to null.
    pub fn where_by(&self, p: &str, op: &str, value: &Value) -> Collection {
        let op = CmpOp::parse(op);
        self.filter(|_, v| {
            let resolved = path::resolve(v, p).unwrap_or(Value::Null);
            op.matches(&resolved, value)
        })
    }

    /// Strict-equality `where`.
    pub fn where_by_strict(&self, p: &str, value: &Value) -> Collection {
        self.filter(|_, v| path::resolve(v, p).unwrap_or(Value::Null) == *value)
    }

    /// Keep entries whose resolved value is loosely contained in `set`.
    pub fn where_in(&self, p: &str, set: &[Value]) -> Collection {
        self.filter(|_, v| {
            let resolved = path::resolve(v, p).unwrap_or(Value::Null);
            set.iter().any(|candidate| loose_eq(&resolved, candidate))
        })
    }

    /// Strict variant of [`where_in`](Collection::where_in).
    pub fn where_in_strict(&self, p: &str, set: &[Value]) -> Collection {
        self.filter(|_, v| {
            let resolved = path::resolve(v, p).unwrap_or(Value::Null);
            set.contains(&resolved)
        })
    }

    /// Keep the first occurrence of each value under loose equality; later
    /// duplicates are dropped, order and keys of survivors preserved.
    pub fn unique(&self) -> Collection {
        self.unique_with(Selector::func(|_, v| v.clone()), false)
    }

    /// Like [`unique`](Collection::unique), deduplicating on the selector's
    /// resolution instead of the raw value.
    pub fn unique_by(&self, selector: impl Into<Selector>) -> Collection {
        self.unique_with(selector.into(), false)
    }

    /// Strict-equality variant of [`unique_by`](Collection::unique_by).
    pub fn unique_by_strict(&self, selector: impl Into<Selector>) -> Collection {
        self.unique_with(selector.into(), true)
    }

    fn unique_with(&self, selector: Selector, strict: bool) -> Collection {
        let mut seen: Vec<Value> = Vec::new();
        self.filter(|k, v| {
            let resolved = selector.resolve(k, v).unwrap_or(Value::Null);
            let duplicate = if strict {
                seen.contains(&resolved)
            } else {
                seen.iter().any(|s| loose_eq(s, &resolved))
            };
            if duplicate {
                false
            } else {
                seen.push(resolved);
                true
            }
        })
    }
}
