use probity_core::{
    as_sequence, bracketed, deep_equal, ConstructionError, MatchFailure, Matcher, Value,
};

/// Scans `actual` once, left to right, for `expected` as an ordered subsequence.
///
/// `matched` counts the expected values located so far; each actual element
/// either extends the match or is skipped. On failure the unmatched suffix of
/// `expected` is reported.
///
/// The suffix is the greedy remainder: `[1, 2, 3]` against `[2, 1, 3]` locates
/// `1` and reports `[2, 3]`, not the whole of `expected`.
fn find_subsequence(expected: &[Value], actual: &[Value]) -> Result<(), MatchFailure> {
    let mut matched = 0;
    for (index, value) in actual.iter().enumerate() {
        if !deep_equal(&expected[matched], value) {
            continue;
        }
        matched += 1;
        if matched == expected.len() {
            tracing::trace!(index, "sequence: final expected value located");
            return Ok(());
        }
    }
    tracing::trace!(
        matched,
        outstanding = expected.len() - matched,
        "sequence: scan exhausted"
    );
    Err(MatchFailure::Missing(expected[matched..].to_vec()))
}

/// Accepts sequences containing the expected values in order, not necessarily adjacent.
#[derive(Debug, Clone)]
pub struct Sequence {
    expected: Vec<Value>,
    description: String,
}

impl Matcher for Sequence {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        find_subsequence(&self.expected, as_sequence(actual)?)
    }
}

/// Creates a [`Sequence`] matcher, rejecting an empty expected list.
pub fn try_sequence<I, T>(expected: I) -> Result<Sequence, ConstructionError>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let expected: Vec<Value> = expected.into_iter().map(Into::into).collect();
    if expected.is_empty() {
        return Err(ConstructionError::EmptySequence);
    }
    let description = format!(
        "values equal to {} in order",
        bracketed(&Value::Array(expected.clone()))
    );
    Ok(Sequence {
        expected,
        description,
    })
}

/// Accepts sequences in which `expected` appears as an ordered subsequence.
///
/// # Panics
///
/// Panics when `expected` is empty.
pub fn sequence<I, T>(expected: I) -> Sequence
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    match try_sequence(expected) {
        Ok(matcher) => matcher,
        Err(err) => panic!("{err}"),
    }
}
