use anyhow::Result;
use gather::{Collection, Selector};
use serde_json::json;

#[test]
fn sum_over_raw_values_and_paths() -> Result<()> {
    let c = Collection::from(json!([1, 2, 3, 4]));
    assert_eq!(c.sum(), 10.0);

    let orders = Collection::from(json!([
        {"total": 100},
        {"total": 35},
        {"total": "15"},
    ]));
    // numeric strings participate; sum_by resolves the dot-path per entry
    assert_eq!(orders.sum_by("total"), 150.0);
    assert_eq!(Collection::new().sum(), 0.0);
    Ok(())
}

#[test]
fn non_numeric_values_are_excluded_from_numeric_folds() -> Result<()> {
    let c = Collection::from(json!([10, "x", null, 20, {"a": 1}]));
    assert_eq!(c.sum(), 30.0);
    assert_eq!(c.avg(), Some(15.0));

    let none = Collection::from(json!(["a", "b"]));
    assert_eq!(none.avg(), None);
    Ok(())
}

#[test]
fn avg_and_alias() -> Result<()> {
    let c = Collection::from(json!([1, 1, 2, 4]));
    assert_eq!(c.avg(), Some(2.0));
    assert_eq!(c.average(), c.avg());
    assert_eq!(Collection::new().avg(), None);
    Ok(())
}

#[test]
fn min_max_skip_nulls() -> Result<()> {
    let c = Collection::from(json!([null, 5, 1, 9, null]));
    assert_eq!(c.min(), Some(json!(1)));
    assert_eq!(c.max(), Some(json!(9)));

    assert_eq!(Collection::new().max(), None);
    assert_eq!(Collection::from(json!([null, null])).min(), None);
    Ok(())
}

#[test]
fn min_max_by_path_with_missing_entries_excluded() -> Result<()> {
    let c = Collection::from(json!([
        {"score": 3},
        {"other": 1},
        {"score": 7},
    ]));
    assert_eq!(c.max_by("score"), Some(json!(7)));
    assert_eq!(c.min_by("score"), Some(json!(3)));
    Ok(())
}

#[test]
fn median_fixtures() -> Result<()> {
    assert_eq!(Collection::from(json!([1, 2, 2, 4])).median(), Some(2.0));
    assert_eq!(Collection::from(json!([0, 3])).median(), Some(1.5));
    assert_eq!(Collection::from(json!([1, 3, 2])).median(), Some(2.0));
    assert_eq!(Collection::new().median(), None);

    let keyed = Collection::from(json!([
        {"foo": 1},
        {"foo": 4},
        {"foo": 2},
    ]));
    assert_eq!(keyed.median_by("foo"), Some(2.0));
    Ok(())
}

#[test]
fn mode_returns_all_winners_sorted_ascending() -> Result<()> {
    assert_eq!(
        Collection::from(json!([1, 1, 2, 4])).mode(),
        Some(vec![json!(1)])
    );
    // both 3 and 1 appear twice; winners come back ascending
    assert_eq!(
        Collection::from(json!([3, 3, 1, 1, 2])).mode(),
        Some(vec![json!(1), json!(3)])
    );
    assert_eq!(Collection::new().mode(), None);
    Ok(())
}

#[test]
fn mode_buckets_loosely() -> Result<()> {
    // 1 and "1" fall into the same bucket under loose equality
    let c = Collection::from(json!([1, "1", 2]));
    assert_eq!(c.mode(), Some(vec![json!(1)]));
    Ok(())
}

#[test]
fn function_selectors_compute_per_entry() -> Result<()> {
    let c = Collection::from(json!([{"pages": 100}, {"pages": 180}]));
    let doubled = c.sum_by(Selector::func(|_, v| {
        json!(v["pages"].as_i64().unwrap() * 2)
    }));
    assert_eq!(doubled, 560.0);
    Ok(())
}

#[test]
fn reduce_folds_in_iteration_order() -> Result<()> {
    let c = Collection::from(json!({"a": "x", "b": "y", "c": "z"}));
    let joined = c.reduce(String::new(), |acc, k, v| {
        format!("{acc}{}{}", k, v.as_str().unwrap())
    });
    assert_eq!(joined, "axbycz");
    Ok(())
}

#[test]
fn pipe_passes_the_whole_collection() -> Result<()> {
    let c = Collection::from(json!([1, 2, 3]));
    let result = c.pipe(|col| col.sum() + col.len() as f64);
    assert_eq!(result, 9.0);
    Ok(())
}
