use probity_core::{
    as_sequence, bracketed, equal_to, one_of, ConstructionError, EqualTo, MatchFailure, Matcher,
    OneOf, Value,
};

use crate::every::{any_in_sequence, any_item_matching, AnyItemMatching};

/// Matcher returned by [`item`].
pub type Item = AnyItemMatching<EqualTo>;

/// Matcher returned by [`item_in`].
pub type ItemIn = AnyItemMatching<OneOf>;

/// Accepts sequences containing an element deeply equal to `expected`.
pub fn item(expected: impl Into<Value>) -> Item {
    any_item_matching(equal_to(expected))
}

/// Accepts sequences containing an element deeply equal to any of `expected`.
///
/// # Panics
///
/// Panics when `expected` is empty.
pub fn item_in<I, T>(expected: I) -> ItemIn
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    any_item_matching(one_of(expected))
}

/// Accepts sequences containing every expected value, in any order.
///
/// Each expected value is searched for independently, so one element may
/// satisfy several expectations.
#[derive(Debug, Clone)]
pub struct Items {
    expected: Vec<EqualTo>,
    description: String,
}

impl Matcher for Items {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        let actual = as_sequence(actual)?;
        for expected in &self.expected {
            any_in_sequence(expected, actual)?;
        }
        Ok(())
    }
}

/// Creates an [`Items`] matcher, rejecting an empty expected list.
pub fn try_items<I, T>(expected: I) -> Result<Items, ConstructionError>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let expected: Vec<EqualTo> = expected.into_iter().map(equal_to).collect();
    if expected.is_empty() {
        return Err(ConstructionError::EmptyItems);
    }
    let values = expected.iter().map(|m| m.expected().clone()).collect();
    let description = format!(
        "values equal to {} in any order",
        bracketed(&Value::Array(values))
    );
    Ok(Items {
        expected,
        description,
    })
}

/// Accepts sequences containing every one of `expected`, in any order.
///
/// # Panics
///
/// Panics when `expected` is empty.
pub fn items<I, T>(expected: I) -> Items
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    match try_items(expected) {
        Ok(matcher) => matcher,
        Err(err) => panic!("{err}"),
    }
}
