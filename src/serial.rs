//! Output conversions: JSON views and the serialize/deserialize envelope.

use crate::collection::Collection;
use crate::error::Result;
use crate::key::Key;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round-trip envelope. Entries are kept as a typed `(Key, Value)` list so
/// integer/string key identity survives, which a plain JSON object (string
/// keys only) could not guarantee.
#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    entries: Vec<(Key, Value)>,
}

const ENVELOPE_VERSION: u32 = 1;

impl Collection {
    /// True iff the keys are exactly `0..len` in order, i.e. the collection
    /// is shaped like a plain sequence.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(i, k)| *k == Key::Int(i as i64))
    }

    /// The plain nested representation of this collection: a JSON array for
    /// list-shaped collections, otherwise a JSON object with stringified
    /// keys. Nested collections were already normalized to value trees on
    /// insertion, so this is a single structural pass.
    #[must_use]
    pub fn to_value(&self) -> Value {
        if self.is_list() {
            Value::Array(self.items.values().cloned().collect())
        } else {
            let mut map = serde_json::Map::new();
            for (k, v) in &self.items {
                map.insert(k.to_string(), v.clone());
            }
            Value::Object(map)
        }
    }

    /// Compact JSON text of [`to_value`](Collection::to_value). The string
    /// conversion of a collection (`Display`) is defined as this form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    /// Pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    /// Serialize the whole collection into its envelope form. Round-trips
    /// through [`deserialize`](Collection::deserialize):
    /// `Collection::deserialize(&c.serialize()?)?.to_value() == c.to_value()`
    /// for every JSON-representable collection.
    pub fn serialize(&self) -> Result<String> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            entries: self.items.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Rebuild a collection from its envelope form.
    pub fn deserialize(text: &str) -> Result<Collection> {
        let envelope: Envelope = serde_json::from_str(text)?;
        Ok(Collection::from_entries(envelope.entries))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
