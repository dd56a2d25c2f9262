//! Value semantics: truthiness, loose equality, and a total order.
//!
//! Every operation the collection describes in terms of "loose" or "strict"
//! comparison funnels through this module, so the rules live in exactly one
//! place. The total order extends `f64::total_cmp` to whole [`Value`] trees.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// The dynamic value type stored in a [`Collection`](crate::Collection).
pub use serde_json::Value;

/// Loose truthiness: `null`, `false`, `0`, `0.0`, `""`, `[]` and `{}` are
/// falsy; everything else is truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(m) => !m.is_empty(),
    }
}

/// Numeric view of a value: numbers directly, strings that parse as numbers
/// by their parsed value. Everything else has no numeric view.
pub fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Loose equality.
///
/// Numbers compare by value across int/float; a number and a numeric string
/// compare by parsed value; booleans compare against numbers as `0`/`1`.
/// Anything else falls back to strict structural equality.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(_), Value::Number(_))
        | (Value::Number(_), Value::String(_))
        | (Value::String(_), Value::Number(_)) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        (Value::Bool(x), Value::Number(_)) => as_number(b) == Some(f64::from(u8::from(*x))),
        (Value::Number(_), Value::Bool(y)) => as_number(a) == Some(f64::from(u8::from(*y))),
        _ => a == b,
    }
}

/// Loose ordering for the relational `where` operators: defined when both
/// sides have a numeric view or both are strings, undefined otherwise.
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return Some(x.total_cmp(&y));
    }
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// A total order over values, used by `sort`, `mode` and min/max folds:
/// null < bool < number < string < array < object. Numbers order by
/// [`OrderedFloat`] of their `f64` view, so NaN and infinities stay total.
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = OrderedFloat(x.as_f64().unwrap_or(f64::NAN));
            let y = OrderedFloat(y.as_f64().unwrap_or(f64::NAN));
            x.cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ord = value_cmp(xv, yv);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => {
            for ((xk, xv), (yk, yv)) in x.iter().zip(y.iter()) {
                let ord = xk.cmp(yk).then_with(|| value_cmp(xv, yv));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

/// String rendering used by `implode`: strings pass through unquoted, null
/// renders empty, `true`/`false` render as `1`/empty, everything else uses
/// its JSON form.
pub(crate) fn display_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
