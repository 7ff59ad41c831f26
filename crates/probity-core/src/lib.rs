#![deny(missing_docs)]
#![doc = "Core matcher contracts for probity: the dynamic value boundary, the deep-equality comparator, elementary matchers, failure types and the assertion harness."]

pub mod assert;
pub mod compare;
pub mod config;
pub mod errors;
pub mod is;
pub mod matcher;
pub mod value;

pub use assert::{assert_that, assert_that_with, check};
pub use compare::{compare, deep_equal, Difference, PathSegment};
pub use config::Rendering;
pub use errors::{AssertionError, ConstructionError, MatchFailure};
pub use is::{equal_to, one_of, try_one_of, EqualTo, OneOf};
pub use matcher::{matcher, BoxedMatcher, FnMatcher, Matcher};
pub use value::{as_sequence, bracketed, render_value, to_actual};

/// Dynamic value every matcher is evaluated against.
pub use serde_json::Value;
