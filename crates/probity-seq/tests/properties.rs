use probity_core::{equal_to, matcher, MatchFailure, Matcher};
use probity_seq::{any_item_matching, every_item_matching, item, items, sequence};
use proptest::prelude::*;
use serde_json::{json, Value};

fn is_subsequence(expected: &[i64], actual: &[i64]) -> bool {
    let mut rest = actual.iter();
    expected.iter().all(|e| rest.any(|a| a == e))
}

fn even() -> impl Matcher {
    matcher("an even number", |actual: &Value| match actual.as_i64() {
        Some(n) if n % 2 == 0 => Ok(()),
        _ => Err(MatchFailure::reason(format!("<{actual}> was odd"))),
    })
}

proptest! {
    #[test]
    fn every_agrees_with_all(values in proptest::collection::vec(0i64..10, 0..12)) {
        let outcome = every_item_matching(even()).matches(&json!(values));
        let expected = !values.is_empty() && values.iter().all(|n| n % 2 == 0);
        prop_assert_eq!(outcome.is_ok(), expected);
        if let Err(failure) = outcome {
            if let Some(first_odd) = values.iter().find(|n| *n % 2 != 0) {
                prop_assert_eq!(
                    failure.to_string(),
                    format!("contained an item where <{first_odd}> was odd")
                );
            }
        }
    }

    #[test]
    fn any_agrees_with_any(values in proptest::collection::vec(0i64..10, 0..12)) {
        let outcome = any_item_matching(even()).matches(&json!(values));
        prop_assert_eq!(outcome.is_ok(), values.iter().any(|n| n % 2 == 0));
    }

    #[test]
    fn item_agrees_with_contains(needle in 0i64..6, values in proptest::collection::vec(0i64..6, 0..10)) {
        prop_assert_eq!(item(needle).matches(&json!(values)).is_ok(), values.contains(&needle));
        prop_assert_eq!(
            any_item_matching(equal_to(needle)).matches(&json!(values)),
            item(needle).matches(&json!(values))
        );
    }

    #[test]
    fn items_agree_with_set_inclusion(
        wanted in proptest::collection::vec(0i64..6, 1..4),
        values in proptest::collection::vec(0i64..6, 0..10)
    ) {
        let expected = wanted.iter().all(|w| values.contains(w));
        prop_assert_eq!(items(wanted.clone()).matches(&json!(values)).is_ok(), expected);
    }

    #[test]
    fn sequence_agrees_with_reference(
        wanted in proptest::collection::vec(0i64..4, 1..5),
        values in proptest::collection::vec(0i64..4, 0..10)
    ) {
        let m = sequence(wanted.clone());
        let actual = json!(values);
        let first = m.matches(&actual);
        prop_assert_eq!(first.is_ok(), is_subsequence(&wanted, &values));
        prop_assert_eq!(first, m.matches(&actual));
    }
}
