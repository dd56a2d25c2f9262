use anyhow::Result;
use gather::Collection;
use serde_json::json;

#[test]
fn first_and_last_plain() -> Result<()> {
    let c = Collection::from(json!([10, 20, 30]));
    assert_eq!(c.first(), Some(&json!(10)));
    assert_eq!(c.last(), Some(&json!(30)));

    let empty = Collection::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
    assert_eq!(empty.first().cloned().unwrap_or(json!("dflt")), json!("dflt"));
    Ok(())
}

#[test]
fn first_where_scans_in_order() -> Result<()> {
    let c = Collection::from(json!([1, 2, 3, 4]));
    assert_eq!(
        c.first_where(|_, v| v.as_i64().unwrap() > 2),
        Some(&json!(3))
    );
    assert_eq!(c.first_where(|_, v| v.as_i64().unwrap() > 9), None);
    Ok(())
}

#[test]
fn last_where_scans_in_reverse() -> Result<()> {
    let c = Collection::from(json!([1, 2, 3, 4]));
    assert_eq!(
        c.last_where(|_, v| v.as_i64().unwrap() < 3),
        Some(&json!(2))
    );
    Ok(())
}

#[test]
fn predicates_see_keys_too() -> Result<()> {
    let c = Collection::from(json!({"a": 1, "b": 2, "target": 3}));
    assert_eq!(
        c.first_where(|k, _| k.as_str() == Some("target")),
        Some(&json!(3))
    );
    Ok(())
}

#[test]
fn search_distinguishes_not_found_from_falsy_keys() -> Result<()> {
    let c = Collection::from(json!([false, 0, ""]));
    // the value false lives at key 0; a miss is None, not a falsy key
    assert_eq!(
        c.search_where(|_, v| *v == json!(false)).and_then(|k| k.as_int()),
        Some(0)
    );
    assert_eq!(c.search(&json!("nope")), None);
    Ok(())
}

#[test]
fn len_and_is_empty() -> Result<()> {
    assert_eq!(Collection::from(json!([1, 2, 3])).len(), 3);
    assert!(Collection::new().is_empty());
    assert!(!Collection::from(json!([0])).is_empty());
    Ok(())
}
