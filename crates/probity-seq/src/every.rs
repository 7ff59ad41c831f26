use probity_core::{as_sequence, MatchFailure, Matcher, Value};

/// Runs `matcher` over every element, stopping at the first failure.
pub(crate) fn every_in_sequence<M>(matcher: &M, actual: &[Value]) -> Result<(), MatchFailure>
where
    M: Matcher + ?Sized,
{
    if actual.is_empty() {
        return Err(MatchFailure::Empty);
    }
    for (index, value) in actual.iter().enumerate() {
        if let Err(reason) = matcher.matches(value) {
            tracing::trace!(index, len = actual.len(), "every: first mismatching item");
            return Err(MatchFailure::ItemMismatch(Box::new(reason)));
        }
    }
    Ok(())
}

/// Runs `matcher` over the elements until one succeeds, collecting every reason otherwise.
pub(crate) fn any_in_sequence<M>(matcher: &M, actual: &[Value]) -> Result<(), MatchFailure>
where
    M: Matcher + ?Sized,
{
    if actual.is_empty() {
        return Err(MatchFailure::Empty);
    }
    let mut reasons = Vec::with_capacity(actual.len());
    for (index, value) in actual.iter().enumerate() {
        match matcher.matches(value) {
            Ok(()) => {
                tracing::trace!(index, len = actual.len(), "any: first matching item");
                return Ok(());
            }
            Err(reason) => reasons.push(reason),
        }
    }
    match <[MatchFailure; 1]>::try_from(reasons) {
        Ok([reason]) => Err(MatchFailure::ItemMismatch(Box::new(reason))),
        Err(reasons) => Err(MatchFailure::NoItemMatched(reasons)),
    }
}

/// Accepts non-empty sequences whose every element satisfies the inner matcher.
#[derive(Debug, Clone)]
pub struct EveryItemMatching<M> {
    matcher: M,
    description: String,
}

impl<M: Matcher> Matcher for EveryItemMatching<M> {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        every_in_sequence(&self.matcher, as_sequence(actual)?)
    }
}

/// Lifts `matcher` to sequences: every element must match.
///
/// An empty sequence fails.
pub fn every_item_matching<M: Matcher>(matcher: M) -> EveryItemMatching<M> {
    let description = format!("every item to have {}", matcher.description());
    EveryItemMatching {
        matcher,
        description,
    }
}

/// Accepts sequences with at least one element satisfying the inner matcher.
#[derive(Debug, Clone)]
pub struct AnyItemMatching<M> {
    matcher: M,
    description: String,
}

impl<M: Matcher> Matcher for AnyItemMatching<M> {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> Result<(), MatchFailure> {
        any_in_sequence(&self.matcher, as_sequence(actual)?)
    }
}

/// Lifts `matcher` to sequences: some element must match.
pub fn any_item_matching<M: Matcher>(matcher: M) -> AnyItemMatching<M> {
    let description = format!("any item to have {}", matcher.description());
    AnyItemMatching {
        matcher,
        description,
    }
}
