use probity_core::{check, ConstructionError, Matcher};
use probity_seq::{item, item_in, items, try_items};
use serde_json::json;

#[test]
fn item_finds_equal_element() {
    assert!(item(3).matches(&json!([1, 2, 3])).is_ok());
    assert_eq!(item(3).description(), "any item to have value equal to <3>");
}

#[test]
fn item_lists_each_mismatch() {
    let failure = item(3).matches(&json!([1, 2, 4])).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "no item matched where [\n          was <1>, expected <3>,\n          was <2>, expected <3>,\n          was <4>, expected <3>\n          ]"
    );
}

#[test]
fn item_uses_deep_equality() {
    let records = json!([{"id": 1, "tags": ["a"]}, {"id": 2, "tags": ["b"]}]);
    assert!(item(json!({"id": 2, "tags": ["b"]})).matches(&records).is_ok());
    assert!(item(json!({"id": 2})).matches(&records).is_err());
}

#[test]
fn item_in_accepts_any_candidate() {
    let m = item_in([7, 3]);
    assert_eq!(m.description(), "any item to have one of <[7,3]>");
    assert!(m.matches(&json!([1, 2, 3])).is_ok());
    let failure = m.matches(&json!([1])).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "contained an item where was <1>, not one of <[7,3]>"
    );
}

#[test]
fn items_ignore_order() {
    assert!(items([1, 2]).matches(&json!([2, 1, 3])).is_ok());
    assert_eq!(
        items([1, 2]).description(),
        "values equal to <[1,2]> in any order"
    );
}

#[test]
fn items_may_reuse_one_element() {
    assert!(items([1, 1]).matches(&json!([1])).is_ok());
}

#[test]
fn items_report_first_missing_value() {
    let failure = items([1, 4]).matches(&json!([1, 2, 3])).unwrap_err();
    let text = failure.to_string();
    assert!(text.starts_with("no item matched where ["));
    assert!(text.contains("expected <4>"));
    assert!(!text.contains("expected <1>"));
}

#[test]
fn items_fail_on_empty_and_non_sequences() {
    assert_eq!(items([1]).matches(&json!([])).unwrap_err().to_string(), "was empty");
    assert_eq!(
        items([1]).matches(&json!("1")).unwrap_err().to_string(),
        "was not a slice or array"
    );
}

#[test]
fn items_without_values_is_a_construction_error() {
    assert_eq!(
        try_items(Vec::<i32>::new()).unwrap_err(),
        ConstructionError::EmptyItems
    );
}

#[test]
#[should_panic(expected = "will never match an empty set of items")]
fn items_without_values_panics() {
    let _ = items(Vec::<i32>::new());
}

#[test]
#[should_panic(expected = "will never match an empty set of items")]
fn items_macro_without_values_panics() {
    let _ = probity_seq::items![];
}

#[test]
fn macros_accept_mixed_literals() {
    let m = probity_seq::items!["a", 2, true];
    assert!(m.matches(&json!([true, "a", 0, 2])).is_ok());
    let m = probity_seq::item_in![1, "x"];
    assert!(m.matches(&json!(["y", "x"])).is_ok());
}

#[test]
fn matchers_apply_to_rust_collections() {
    assert!(check(&items(["b", "a"]), &vec!["a", "b", "c"]).is_ok());
    assert!(check(&item(2), &[1u8, 2, 3]).is_ok());
    assert!(check(&item(2), &(1, 2)).is_ok());
    let err = check(&item(2), &std::collections::BTreeSet::from([5, 6])).unwrap_err();
    assert!(err.to_string().starts_with("expected any item to have value equal to <2>"));
}
