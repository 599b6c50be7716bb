//! Free-text location entered by the user (start or end)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text of a start or end location input
///
/// Either typed by the user or written back by place autocomplete. The only
/// validation applied is the blank check done before routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationInput(String);

impl LocationInput {
    /// Wrap the raw input text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw text, exactly as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the input is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LocationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LocationInput {
    fn from(text: String) -> Self {
        Self(text)
    }
}
