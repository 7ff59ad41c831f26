//! Rendering configuration for failure messages.

use serde::{Deserialize, Serialize};

use crate::errors::ConstructionError;

/// Controls how failures and values are rendered into text.
///
/// The default reproduces the canonical message wording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Rendering {
    /// Spaces used to indent each reason inside an aggregated failure.
    #[serde(default = "Rendering::default_indent")]
    pub indent: usize,
    /// Maximum number of characters of a rendered value before truncation.
    #[serde(default)]
    pub max_value_width: Option<usize>,
}

impl Rendering {
    /// Largest accepted [`indent`](Rendering::indent).
    pub const MAX_INDENT: usize = 64;

    const fn default_indent() -> usize {
        10
    }

    /// Parses a configuration from a JSON document, filling absent fields with defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConstructionError> {
        let rendering: Self = serde_json::from_str(input)
            .map_err(|err| ConstructionError::InvalidRendering(err.to_string()))?;
        if rendering.indent > Self::MAX_INDENT {
            return Err(ConstructionError::InvalidRendering(format!(
                "indent {} exceeds {}",
                rendering.indent,
                Self::MAX_INDENT
            )));
        }
        Ok(rendering)
    }

    /// Returns a copy that truncates rendered values after `width` characters.
    pub fn with_max_value_width(mut self, width: usize) -> Self {
        self.max_value_width = Some(width);
        self
    }
}

impl Default for Rendering {
    fn default() -> Self {
        Self {
            indent: Self::default_indent(),
            max_value_width: None,
        }
    }
}
