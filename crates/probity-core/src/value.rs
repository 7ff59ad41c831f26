//! Conversion of arbitrary values into the dynamic [`Value`] model.

use serde::Serialize;
use serde_json::Value;

use crate::config::Rendering;
use crate::errors::{AssertionError, MatchFailure};

/// Converts any serializable value into the dynamic representation matchers inspect.
///
/// Vectors, slices, arrays, tuples and sets become sequences; everything else
/// keeps its own shape.
pub fn to_actual<T: Serialize + ?Sized>(value: &T) -> Result<Value, AssertionError> {
    serde_json::to_value(value).map_err(|err| AssertionError::Unrepresentable(err.to_string()))
}

/// Returns the elements of a sequence shaped value.
pub fn as_sequence(actual: &Value) -> Result<&[Value], MatchFailure> {
    match actual {
        Value::Array(items) => Ok(items.as_slice()),
        _ => Err(MatchFailure::NotASequence),
    }
}

/// Renders a value in angle brackets as compact JSON.
pub fn render_value(value: &Value, rendering: &Rendering) -> String {
    let text = value.to_string();
    match rendering.max_value_width {
        Some(width) if text.chars().count() > width => {
            let truncated: String = text.chars().take(width).collect();
            format!("<{truncated}...>")
        }
        _ => format!("<{text}>"),
    }
}

/// Renders a value with the default configuration, as used in descriptions.
pub fn bracketed(value: &Value) -> String {
    render_value(value, &Rendering::default())
}
