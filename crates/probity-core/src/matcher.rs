//! The matcher contract and a closure-backed implementation.

use std::fmt;

use serde_json::Value;

use crate::errors::MatchFailure;

/// A described predicate over a single dynamic value.
///
/// Implementations must be pure: evaluating a matcher never mutates it or the
/// actual value, and repeated evaluation of the same input yields the same
/// outcome.
pub trait Matcher: Send + Sync {
    /// Summary of what the matcher accepts, used in failure messages.
    fn description(&self) -> String;

    /// Tests the actual value, returning the reason on failure.
    fn matches(&self, actual: &Value) -> Result<(), MatchFailure>;
}

/// Owned, type erased matcher.
pub type BoxedMatcher = Box<dyn Matcher>;

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        (**self).matches(actual)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn description(&self) -> String {
        (**self).description()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        (**self).matches(actual)
    }
}

/// Matcher assembled from a fixed description and a predicate closure.
pub struct FnMatcher<F> {
    description: String,
    predicate: F,
}

impl<F> fmt::Debug for FnMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMatcher")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<F> Matcher for FnMatcher<F>
where
    F: Fn(&Value) -> Result<(), MatchFailure> + Send + Sync,
{
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        (self.predicate)(actual)
    }
}

/// Creates a matcher from a description and a predicate.
pub fn matcher<F>(description: impl Into<String>, predicate: F) -> FnMatcher<F>
where
    F: Fn(&Value) -> Result<(), MatchFailure> + Send + Sync,
{
    FnMatcher {
        description: description.into(),
        predicate,
    }
}
