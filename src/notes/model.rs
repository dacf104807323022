//! Request-scoped values flowing through the notes pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// An API credential entered by the user.
///
/// Opaque: it is never inspected, only forwarded to the completion endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty (or whitespace-only) entry.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(********)")
    }
}

/// Structured notes produced for one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub action_items: Vec<String>,

    #[serde(default)]
    pub follow_ups: Vec<String>,
}
