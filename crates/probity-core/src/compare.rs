//! Deep structural equality over dynamic values.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Rendering;
use crate::value::render_value;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position within a sequence.
    Index(usize),
    /// Key within an object.
    Key(String),
}

/// First structural difference found between an expected and an actual value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    /// Location of the first difference, outermost segment first. Empty at the root.
    pub path: Vec<PathSegment>,
    /// The complete expected value.
    pub expected: Value,
    /// The complete actual value.
    pub actual: Value,
}

impl Difference {
    /// Formats the path as `$`, `$[1]`, `$.name[0]`, ...
    pub fn path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                PathSegment::Index(index) => out.push_str(&format!("[{index}]")),
                PathSegment::Key(key) => {
                    out.push('.');
                    out.push_str(key);
                }
            }
        }
        out
    }

    /// Sub-values of expected and actual at the differing location.
    pub fn at_path(&self) -> (Option<&Value>, Option<&Value>) {
        (descend(&self.expected, &self.path), descend(&self.actual, &self.path))
    }

    /// Renders the difference using the provided configuration.
    pub fn render(&self, rendering: &Rendering) -> String {
        let mut out = format!(
            "was {}, expected {}",
            render_value(&self.actual, rendering),
            render_value(&self.expected, rendering)
        );
        if !self.path.is_empty() {
            out.push_str(&format!(", differing at {}", self.path_string()));
        }
        out
    }
}

impl Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Rendering::default()))
    }
}

/// Compares two values for deep equality.
///
/// Sequences must have equal length and equal elements position by position;
/// objects must have the same key set and equal values per key. Numbers
/// compare by representation, so an integer never equals a float.
pub fn compare(expected: &Value, actual: &Value) -> Result<(), Difference> {
    match first_difference(expected, actual) {
        None => Ok(()),
        Some(mut path) => {
            path.reverse();
            Err(Difference {
                path,
                expected: expected.clone(),
                actual: actual.clone(),
            })
        }
    }
}

/// Reports whether two values are deeply equal, under the same rules as [`compare`].
///
/// Unlike [`compare`] this neither clones nor records a path. The rules above
/// coincide with `Value`'s own structural equality.
pub fn deep_equal(expected: &Value, actual: &Value) -> bool {
    expected == actual
}

// Path is collected innermost first.
fn first_difference(expected: &Value, actual: &Value) -> Option<Vec<PathSegment>> {
    match (expected, actual) {
        (Value::Array(expected), Value::Array(actual)) => {
            if expected.len() != actual.len() {
                return Some(Vec::new());
            }
            expected
                .iter()
                .zip(actual)
                .enumerate()
                .find_map(|(index, (e, a))| {
                    first_difference(e, a).map(|mut path| {
                        path.push(PathSegment::Index(index));
                        path
                    })
                })
        }
        (Value::Object(expected), Value::Object(actual)) => {
            if expected.len() != actual.len() || expected.keys().any(|key| !actual.contains_key(key))
            {
                return Some(Vec::new());
            }
            expected.iter().find_map(|(key, e)| {
                let a = actual.get(key)?;
                first_difference(e, a).map(|mut path| {
                    path.push(PathSegment::Key(key.clone()));
                    path
                })
            })
        }
        _ => (expected != actual).then(Vec::new),
    }
}

fn descend<'a>(value: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match segment {
        PathSegment::Index(index) => current.get(*index),
        PathSegment::Key(key) => current.get(key.as_str()),
    })
}
