//! Assertion harness evaluating matchers against serializable values.

use serde::Serialize;

use crate::config::Rendering;
use crate::errors::AssertionError;
use crate::matcher::Matcher;
use crate::value::to_actual;

/// Evaluates `matcher` against `actual`.
pub fn check<M, T>(matcher: &M, actual: &T) -> Result<(), AssertionError>
where
    M: Matcher + ?Sized,
    T: Serialize + ?Sized,
{
    let actual = to_actual(actual)?;
    matcher.matches(&actual).map_err(|failure| {
        tracing::debug!(code = failure.code(), "matcher rejected actual value");
        AssertionError::Mismatch {
            description: matcher.description(),
            failure,
        }
    })
}

/// Asserts that `actual` satisfies `matcher`.
///
/// # Panics
///
/// Panics with the matcher description and failure reason when the match fails.
#[track_caller]
pub fn assert_that<M, T>(matcher: &M, actual: &T)
where
    M: Matcher + ?Sized,
    T: Serialize + ?Sized,
{
    assert_that_with(matcher, actual, &Rendering::default());
}

/// Like [`assert_that`], rendering the failure with explicit configuration.
///
/// # Panics
///
/// Panics when the match fails.
#[track_caller]
pub fn assert_that_with<M, T>(matcher: &M, actual: &T, rendering: &Rendering)
where
    M: Matcher + ?Sized,
    T: Serialize + ?Sized,
{
    if let Err(err) = check(matcher, actual) {
        panic!("{}", err.render(rendering));
    }
}

/// Asserts that a value satisfies a matcher.
///
/// ```ignore
/// assert_that!(vec![1, 2, 3], equal_to(serde_json::json!([1, 2, 3])));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        $crate::assert_that(&$matcher, &$actual)
    };
}
