use anyhow::Result;
use gather::{Collection, Key};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn list_shaped_collections_render_as_arrays() -> Result<()> {
    let c = Collection::from(json!([1, "two", null]));
    assert_eq!(c.to_value(), json!([1, "two", null]));
    assert_eq!(c.to_json()?, r#"[1,"two",null]"#);
    Ok(())
}

#[test]
fn keyed_collections_render_as_objects() -> Result<()> {
    let c = Collection::from(json!({"b": 1, "a": 2}));
    // preserve_order keeps object key order equal to insertion order
    assert_eq!(c.to_json()?, r#"{"b":1,"a":2}"#);
    Ok(())
}

#[test]
fn gapped_integer_keys_render_as_objects() -> Result<()> {
    let mut c = Collection::from(json!(["a", "b", "c"]));
    c.remove(1);
    assert!(!c.is_list());
    assert_eq!(c.to_value(), json!({"0": "a", "2": "c"}));
    Ok(())
}

#[test]
fn display_is_the_json_form() -> Result<()> {
    let c = Collection::from(json!([1, 2]));
    assert_eq!(c.to_string(), c.to_json()?);
    Ok(())
}

#[test]
fn nested_values_stay_nested_in_the_json_view() -> Result<()> {
    let c = Collection::from(json!({
        "user": {"name": "ann", "tags": ["a", "b"]},
        "count": 2,
    }));
    assert_eq!(
        c.to_value(),
        json!({"user": {"name": "ann", "tags": ["a", "b"]}, "count": 2})
    );
    Ok(())
}

#[test]
fn envelope_round_trip_preserves_entries() -> Result<()> {
    let c = Collection::from(json!({
        "name": "desk",
        "dims": [120, 60],
        "meta": {"color": "oak"},
    }));
    let restored = Collection::deserialize(&c.serialize()?)?;
    assert_eq!(restored.to_value(), c.to_value());
    assert_eq!(restored, c);
    Ok(())
}

#[test]
fn envelope_round_trip_preserves_key_identity() -> Result<()> {
    // integer key 1 and string key "x" must come back as the same kinds
    let c = Collection::from_entries([
        (Key::Int(1), json!("one")),
        (Key::from("x"), json!("ex")),
    ]);
    let restored = Collection::deserialize(&c.serialize()?)?;
    assert!(restored.has(1));
    assert!(restored.has("x"));
    assert_eq!(restored, c);
    Ok(())
}

#[test]
fn empty_collection_round_trips() -> Result<()> {
    let restored = Collection::deserialize(&Collection::new().serialize()?)?;
    assert!(restored.is_empty());
    assert_eq!(restored.to_value(), json!([]));
    Ok(())
}

#[test]
fn deserialize_rejects_malformed_envelopes() -> Result<()> {
    assert!(Collection::deserialize("{").is_err());
    assert!(Collection::deserialize(r#"{"version": 1}"#).is_err());
    Ok(())
}

#[test]
fn pretty_json_is_parseable_back() -> Result<()> {
    let c = Collection::from(json!({"a": [1, 2]}));
    let pretty = c.to_json_pretty()?;
    let reparsed = Collection::from_json_str(&pretty)?;
    assert_eq!(reparsed.to_value(), c.to_value());
    Ok(())
}
