//! Name/value tags attached to photos

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `name: value` tag
///
/// Equality is an exact, case-sensitive match on both fields. Producers are
/// expected to lowercase values before construction (see [`Tag::normalized`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    value: String,
}

impl Tag {
    /// Create a tag exactly as given
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a tag from user input: both parts trimmed and lowercased
    #[must_use]
    pub fn normalized(name: &str, value: &str) -> Self {
        Self::new(name.trim().to_lowercase(), value.trim().to_lowercase())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Split a comma-separated value entry into normalized values
///
/// Each token is trimmed and lowercased; empty tokens are dropped.
///
/// # Examples
/// ```
/// use photos::model::tag::parse_values;
/// assert_eq!(parse_values(" Alice, BOB ,, "), vec!["alice", "bob"]);
/// ```
#[must_use]
pub fn parse_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Explain why a (name, value) input row cannot become tags
///
/// Rows with both parts blank are ignored by callers and are not a problem;
/// a row with only one part filled in is.
#[must_use]
pub fn incomplete_row(name: &str, value: &str) -> Option<String> {
    match (name.trim().is_empty(), value.trim().is_empty()) {
        (false, true) => Some(format!("the \"{}\" tag has no value", name.trim())),
        (true, false) => Some(format!("the \"{}\" tag has no type", value.trim())),
        _ => None,
    }
}
