//! Failure and error types shared across probity crates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::compare::Difference;
use crate::config::Rendering;
use crate::value::render_value;

/// Structured reason a matcher rejected an actual value.
///
/// Every variant carries a stable machine readable [`code`](MatchFailure::code);
/// the [`Display`] output is the human readable sentence shown in test output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum MatchFailure {
    /// The actual value was not sequence shaped.
    NotASequence,
    /// The actual sequence had no elements.
    Empty,
    /// A single element failed the inner matcher.
    ItemMismatch(Box<MatchFailure>),
    /// No element satisfied the inner matcher; one reason per element tested.
    NoItemMatched(Vec<MatchFailure>),
    /// Expected values that could not be located, in expected order.
    Missing(Vec<Value>),
    /// The comparator found the values structurally different.
    Unequal(Difference),
    /// The actual value equalled none of the candidates.
    NotOneOf {
        /// The value that was tested.
        actual: Value,
        /// The accepted candidates.
        candidates: Vec<Value>,
    },
    /// Free form reason produced by an ad-hoc matcher.
    Reason(String),
}

impl MatchFailure {
    /// Creates a free form failure reason.
    pub fn reason(text: impl Into<String>) -> Self {
        MatchFailure::Reason(text.into())
    }

    /// Returns the stable identifier of the failure family.
    pub fn code(&self) -> &'static str {
        match self {
            MatchFailure::NotASequence => "not-a-sequence",
            MatchFailure::Empty => "empty",
            MatchFailure::ItemMismatch(_) => "item-mismatch",
            MatchFailure::NoItemMatched(_) => "no-item-matched",
            MatchFailure::Missing(_) => "missing",
            MatchFailure::Unequal(_) => "unequal",
            MatchFailure::NotOneOf { .. } => "not-one-of",
            MatchFailure::Reason(_) => "reason",
        }
    }

    /// Renders the failure sentence using the provided configuration.
    pub fn render(&self, rendering: &Rendering) -> String {
        match self {
            MatchFailure::NotASequence => "was not a slice or array".to_string(),
            MatchFailure::Empty => "was empty".to_string(),
            MatchFailure::ItemMismatch(reason) => {
                format!("contained an item where {}", reason.render(rendering))
            }
            MatchFailure::NoItemMatched(reasons) => {
                let pad = " ".repeat(rendering.indent);
                let joined = reasons
                    .iter()
                    .map(|reason| reason.render(rendering))
                    .collect::<Vec<_>>()
                    .join(&format!(",\n{pad}"));
                format!("no item matched where [\n{pad}{joined}\n{pad}]")
            }
            MatchFailure::Missing(values) => match values.as_slice() {
                [single] => format!("did not contain {}", render_value(single, rendering)),
                _ => format!(
                    "did not contain {}",
                    render_value(&Value::Array(values.clone()), rendering)
                ),
            },
            MatchFailure::Unequal(difference) => difference.render(rendering),
            MatchFailure::NotOneOf { actual, candidates } => format!(
                "was {}, not one of {}",
                render_value(actual, rendering),
                render_value(&Value::Array(candidates.clone()), rendering)
            ),
            MatchFailure::Reason(text) => text.clone(),
        }
    }
}

impl Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Rendering::default()))
    }
}

impl std::error::Error for MatchFailure {}

/// Invalid matcher or configuration construction.
///
/// These describe mistakes in how an assertion was written, so the plain
/// constructors panic with this message instead of returning it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// `items` was given no expected values.
    #[error("will never match an empty set of items")]
    EmptyItems,
    /// `sequence` was given no expected values.
    #[error("will never match an empty sequence of items")]
    EmptySequence,
    /// `one_of` was given no candidates.
    #[error("will never match an empty set of candidates")]
    EmptyCandidates,
    /// A rendering configuration document could not be parsed.
    #[error("invalid rendering configuration: {0}")]
    InvalidRendering(String),
}

/// Error returned by the assertion harness.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    /// The matcher rejected the actual value.
    #[error("expected {description}\n     but: {failure}")]
    Mismatch {
        /// Description of the matcher that was applied.
        description: String,
        /// Reason the matcher gave.
        failure: MatchFailure,
    },
    /// The actual value has no dynamic representation.
    #[error("actual value could not be represented: {0}")]
    Unrepresentable(String),
}

impl AssertionError {
    /// Renders the error using the provided configuration.
    pub fn render(&self, rendering: &Rendering) -> String {
        match self {
            AssertionError::Mismatch {
                description,
                failure,
            } => format!(
                "expected {description}\n     but: {}",
                failure.render(rendering)
            ),
            other => other.to_string(),
        }
    }

    /// Returns the match failure when the error is a mismatch.
    pub fn failure(&self) -> Option<&MatchFailure> {
        match self {
            AssertionError::Mismatch { failure, .. } => Some(failure),
            AssertionError::Unrepresentable(_) => None,
        }
    }
}
