//! Component identifiers.
//!
//! A component names a buildable unit of the operator project: its entry
//! point lives at `cmd/<component>/main.go` and its image descriptor is
//! generated under `_output/images/<component>/`.

use crate::error::{OpgenError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static COMPONENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("Invalid component regex")
});

/// A validated component identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(String);

impl Component {
    /// Validate a raw command-line argument as a component.
    ///
    /// Empty or blank input is `MissingComponentArgument`; anything that is not
    /// a single safe path segment is `InvalidComponent`.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(OpgenError::MissingComponentArgument);
        }
        // ".." is rejected by the leading-character rule.
        if !COMPONENT_REGEX.is_match(name) {
            return Err(OpgenError::InvalidComponent(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
