//! Elementary matchers built on the deep-equality comparator.

use serde_json::Value;

use crate::compare::{compare, deep_equal};
use crate::errors::{ConstructionError, MatchFailure};
use crate::matcher::Matcher;
use crate::value::bracketed;

/// Accepts values deeply equal to the expected value.
#[derive(Debug, Clone)]
pub struct EqualTo {
    expected: Value,
    description: String,
}

impl EqualTo {
    /// The value this matcher compares against.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for EqualTo {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        compare(&self.expected, actual).map_err(MatchFailure::Unequal)
    }
}

/// Creates a matcher accepting values deeply equal to `expected`.
pub fn equal_to(expected: impl Into<Value>) -> EqualTo {
    let expected = expected.into();
    let description = format!("value equal to {}", bracketed(&expected));
    EqualTo {
        expected,
        description,
    }
}

/// Accepts values deeply equal to any one of a fixed set of candidates.
#[derive(Debug, Clone)]
pub struct OneOf {
    candidates: Vec<Value>,
    description: String,
}

impl Matcher for OneOf {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        if self
            .candidates
            .iter()
            .any(|candidate| deep_equal(candidate, actual))
        {
            return Ok(());
        }
        Err(MatchFailure::NotOneOf {
            actual: actual.clone(),
            candidates: self.candidates.clone(),
        })
    }
}

/// Creates a [`OneOf`] matcher, rejecting an empty candidate list.
pub fn try_one_of<I, T>(candidates: I) -> Result<OneOf, ConstructionError>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
    if candidates.is_empty() {
        return Err(ConstructionError::EmptyCandidates);
    }
    let description = format!("one of {}", bracketed(&Value::Array(candidates.clone())));
    Ok(OneOf {
        candidates,
        description,
    })
}

/// Creates a matcher accepting values deeply equal to any of `candidates`.
///
/// # Panics
///
/// Panics when `candidates` is empty.
pub fn one_of<I, T>(candidates: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    match try_one_of(candidates) {
        Ok(matcher) => matcher,
        Err(err) => panic!("{err}"),
    }
}
