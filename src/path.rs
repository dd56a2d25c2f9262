//! Dot-path resolution over [`Value`] trees.
//!
//! A dot-path like `"user.address.city"` is split on `.` and walked segment
//! by segment: object segments look up fields, integer segments index into
//! arrays. The wildcard segment `*` fans out over every element at that
//! level, applies the remaining path to each, and collapses the matches
//! into one flat sequence.

use crate::key::Key;
use crate::value::Value;

/// Resolve `path` against `root`. Returns `None` when the path walks off
/// the structure. A wildcard segment always resolves (possibly to an empty
/// sequence) as long as it lands on a sequence or map.
pub fn resolve(root: &Value, path: &str) -> Option<Value> {
    let segments: Vec<&str> = path.split('.').collect();
    resolve_segments(root, &segments)
}

fn resolve_segments(value: &Value, segments: &[&str]) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(value.clone());
    };

    if *head == "*" {
        let children: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => return None,
        };
        // Collapse nested wildcard results one level so a `a.*.b.*` path
        // still yields a single flat sequence of matches.
        let nested_wildcard = rest.contains(&"*");
        let mut matches = Vec::new();
        for child in children {
            if let Some(found) = resolve_segments(child, rest) {
                match found {
                    Value::Array(inner) if nested_wildcard => matches.extend(inner),
                    other => matches.push(other),
                }
            }
        }
        return Some(Value::Array(matches));
    }

    let next = match value {
        Value::Object(map) => map.get(*head),
        Value::Array(items) => head.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }?;
    resolve_segments(next, rest)
}

/// How an operation picks the value it works on for each entry: either a
/// dot-path resolved against the entry's value, or an arbitrary function of
/// the entry. Strings convert into path selectors, so call sites read
/// `c.sort_by("price")`; use [`Selector::func`] for computed selectors.
pub struct Selector {
    kind: SelectorKind,
}

enum SelectorKind {
    Path(String),
    Func(Box<dyn Fn(&Key, &Value) -> Value>),
}

impl Selector {
    /// A dot-path selector.
    pub fn path(path: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Path(path.into()),
        }
    }

    /// A computed selector over `(key, value)`.
    pub fn func(f: impl Fn(&Key, &Value) -> Value + 'static) -> Self {
        Selector {
            kind: SelectorKind::Func(Box::new(f)),
        }
    }

    /// Resolve this selector for one entry. `None` only for a path selector
    /// that misses; function selectors always produce a value.
    pub(crate) fn resolve(&self, key: &Key, value: &Value) -> Option<Value> {
        match &self.kind {
            SelectorKind::Path(p) => resolve(value, p),
            SelectorKind::Func(f) => Some(f(key, value)),
        }
    }
}

impl From<&str> for Selector {
    fn from(path: &str) -> Self {
        Selector::path(path)
    }
}

impl From<String> for Selector {
    fn from(path: String) -> Self {
        Selector::path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_objects_and_array_indices() {
        let v = json!({"user": {"tags": ["a", "b"]}});
        assert_eq!(resolve(&v, "user.tags.1"), Some(json!("b")));
        assert_eq!(resolve(&v, "user.missing"), None);
        assert_eq!(resolve(&v, "user.tags.9"), None);
    }

    #[test]
    fn wildcard_fans_out_and_collapses() {
        let v = json!({"teams": [
            {"members": [{"name": "ann"}, {"name": "bo"}]},
            {"members": [{"name": "cy"}]},
        ]});
        assert_eq!(
            resolve(&v, "teams.*.members.*.name"),
            Some(json!(["ann", "bo", "cy"]))
        );
        assert_eq!(resolve(&v, "teams.*.missing"), Some(json!([])));
    }

    #[test]
    fn wildcard_over_map_values() {
        let v = json!({"a": {"x": 1}, "b": {"x": 2}});
        assert_eq!(resolve(&v, "*.x"), Some(json!([1, 2])));
    }
}
