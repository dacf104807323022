//! smart-notes - Turn meeting transcripts into actionable notes
//!
//! A pasted transcript goes through one chat-completion request and comes back
//! as a summary, a list of action items, and a list of follow-ups.

pub mod cli;
pub mod config;
pub mod llm;
pub mod notes;
pub mod tui;

use thiserror::Error;

/// Why a single "generate" request failed.
///
/// Every variant is local to one request; callers may simply try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The endpoint rejected the credential (401/403).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The endpoint asked us to slow down (429).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Transport failure or any other non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// The completion could not be decoded or its content is not a JSON object.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// True when the request reached the model but its output could not be parsed.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, AnalysisError::MalformedResponse(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "smart-notes";
