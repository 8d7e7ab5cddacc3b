//! Identifier types for the lexical network

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Leading character reserved for sentinel synsets (inferred or synthetic nodes).
pub const PLACEHOLDER_PREFIX: char = '*';

/// Identifier some stores hand out for an inferred, unavailable synset.
pub const INFERRED_MARKER: &str = "*INFERRED*";

/// Stable synset identifier, e.g. `oewn-02086723-n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynsetId(String);

impl SynsetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True for sentinel identifiers that must never be traversed into or rendered.
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_id(&self.0)
    }
}

/// Checks a raw identifier string against the reserved placeholder markers.
pub fn is_placeholder_id(id: &str) -> bool {
    id.is_empty() || id.starts_with(PLACEHOLDER_PREFIX) || id.contains(INFERRED_MARKER)
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SynsetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SynsetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SynsetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SynsetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
