use anyhow::Result;
use gather::{Collection, Key, Source};
use serde_json::json;

#[test]
fn normalizes_json_arrays_to_sequential_keys() -> Result<()> {
    let c = Collection::from(json!(["a", "b", "c"]));
    assert_eq!(c.len(), 3);
    assert_eq!(c.get(0), Some(&json!("a")));
    assert_eq!(c.get(2), Some(&json!("c")));
    assert!(c.is_list());
    Ok(())
}

#[test]
fn normalizes_json_objects_and_coerces_integer_keys() -> Result<()> {
    let c = Collection::from(json!({"name": "desk", "3": "three", "007": "bond"}));
    assert!(c.has("name"));
    // canonical integer strings become integer keys, padded ones stay strings
    assert!(c.has(3));
    assert!(c.has("007"));
    assert_eq!(c.keys_iter().cloned().collect::<Vec<_>>(), vec![
        Key::from("name"),
        Key::Int(3),
        Key::from("007"),
    ]);
    Ok(())
}

#[test]
fn null_and_empty_sources_are_the_empty_collection() -> Result<()> {
    assert!(Collection::from(json!(null)).is_empty());
    assert!(Collection::from_source(Source::Empty)?.is_empty());
    assert!(Collection::from_source(Source::Scalar(json!(null)))?.is_empty());
    assert_eq!(Collection::new(), Collection::from(json!(null)));
    Ok(())
}

#[test]
fn scalar_sources_wrap_as_single_element() -> Result<()> {
    let c = Collection::from(json!(42));
    assert_eq!(c.to_value(), json!([42]));
    Ok(())
}

#[test]
fn thunk_sources_are_invoked_and_renormalized() -> Result<()> {
    let c = Collection::from_source(Source::Thunk(Box::new(|| {
        Source::Sequence(vec![json!(1), json!(2)])
    })))?;
    assert_eq!(c.to_value(), json!([1, 2]));
    Ok(())
}

#[test]
fn json_text_sources_parse_or_fail() -> Result<()> {
    let c = Collection::from_json_str(r#"{"a": 1}"#)?;
    assert_eq!(c.get("a"), Some(&json!(1)));
    assert!(Collection::from_json_str("not json").is_err());
    Ok(())
}

#[test]
fn container_sources_copy_entries() -> Result<()> {
    let original = Collection::from(json!({"a": 1}));
    let copied = Collection::from_source(Source::Container(original.clone()))?;
    assert_eq!(copied, original);
    Ok(())
}

#[test]
fn get_or_and_lazy_default() -> Result<()> {
    let c = Collection::from(json!({"a": 1}));
    assert_eq!(c.get_or("a", json!(0)), json!(1));
    assert_eq!(c.get_or("missing", json!("fallback")), json!("fallback"));

    // the default thunk only runs on a miss
    let mut invoked = false;
    let hit = c.get_or_else("a", || {
        invoked = true;
        json!(0)
    });
    assert_eq!(hit, json!(1));
    assert!(!invoked);
    Ok(())
}

#[test]
fn set_updates_in_place_and_appends_new_keys() -> Result<()> {
    let mut c = Collection::from(json!({"a": 1, "b": 2}));
    c.set("a", json!(10));
    c.set("c", json!(3));
    assert_eq!(c.to_value(), json!({"a": 10, "b": 2, "c": 3}));
    Ok(())
}

#[test]
fn remove_preserves_order_of_the_rest() -> Result<()> {
    let mut c = Collection::from(json!({"a": 1, "b": 2, "c": 3}));
    assert_eq!(c.remove("b"), Some(json!(2)));
    assert_eq!(c.remove("b"), None);
    assert_eq!(c.to_value(), json!({"a": 1, "c": 3}));
    Ok(())
}

#[test]
fn forget_drops_many_keys_and_chains() -> Result<()> {
    let mut c = Collection::from(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
    c.forget(["a", "c"]).forget(["nope"]);
    assert_eq!(c.to_value(), json!({"b": 2, "d": 4}));
    Ok(())
}

#[test]
fn append_allocates_past_largest_integer_key() -> Result<()> {
    let mut c = Collection::from_entries([
        (Key::Int(5), json!("five")),
        (Key::from("label"), json!("x")),
    ]);
    c.push(json!("next"));
    assert_eq!(c.get(6), Some(&json!("next")));
    Ok(())
}

#[test]
fn iteration_is_in_insertion_order_and_restartable() -> Result<()> {
    let c = Collection::from(json!({"b": 1, "a": 2, "c": 3}));
    let first_pass: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
    let second_pass: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(first_pass, vec!["b", "a", "c"]);
    assert_eq!(first_pass, second_pass);

    // peeking view over the same iteration
    let mut peek = c.iter().peekable();
    assert_eq!(peek.peek().map(|(k, _)| k.to_string()), Some("b".into()));
    assert_eq!(peek.next().map(|(k, _)| k.to_string()), Some("b".into()));
    assert_eq!(peek.peek().map(|(k, _)| k.to_string()), Some("a".into()));
    Ok(())
}

#[test]
fn indexing_returns_present_values() -> Result<()> {
    let c = Collection::from(json!({"a": 1}));
    assert_eq!(c["a"], json!(1));
    let list = Collection::from(json!([10, 20]));
    assert_eq!(list[1], json!(20));
    Ok(())
}

#[test]
#[should_panic(expected = "missing key")]
fn indexing_an_absent_key_panics() {
    let c = Collection::from(json!({"a": 1}));
    let _ = &c["missing"];
}
