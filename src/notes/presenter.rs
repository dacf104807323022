//! Presentation of notes and per-request notices

use crate::notes::{AnalysisResult, Outcome};

pub const SUMMARY_PLACEHOLDER: &str = "No summary available.";
pub const ACTION_ITEMS_PLACEHOLDER: &str = "No action items detected.";
pub const FOLLOW_UPS_PLACEHOLDER: &str = "No follow-ups detected.";

pub const EMPTY_TRANSCRIPT_NOTICE: &str = "Please paste a transcript first.";
pub const MISSING_CREDENTIAL_NOTICE: &str = "Please enter your Groq API Key to continue.";
pub const PARSE_FAILURE_NOTICE: &str = "Failed to parse AI response. Please try again.";

/// Body of one rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    Bullets(&'a [String]),
    Placeholder(&'static str),
}

/// One of the three columns shown for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

/// Summary, action items and follow-ups, in display order.
pub fn sections(result: &AnalysisResult) -> [Section<'_>; 3] {
    let summary = if result.summary.is_empty() {
        SectionBody::Placeholder(SUMMARY_PLACEHOLDER)
    } else {
        SectionBody::Text(&result.summary)
    };

    [
        Section {
            title: "Summary",
            body: summary,
        },
        Section {
            title: "Action Items",
            body: bullets_or(&result.action_items, ACTION_ITEMS_PLACEHOLDER),
        },
        Section {
            title: "Follow-ups",
            body: bullets_or(&result.follow_ups, FOLLOW_UPS_PLACEHOLDER),
        },
    ]
}

fn bullets_or<'a>(items: &'a [String], placeholder: &'static str) -> SectionBody<'a> {
    if items.is_empty() {
        SectionBody::Placeholder(placeholder)
    } else {
        SectionBody::Bullets(items)
    }
}

/// Plain-text rendering used by the CLI.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    for (index, section) in sections(result).iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {} ==\n", section.title));
        match section.body {
            SectionBody::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            SectionBody::Bullets(items) => {
                for item in items {
                    out.push_str(&format!("- {}\n", item));
                }
            }
            SectionBody::Placeholder(text) => {
                out.push_str(text);
                out.push('\n');
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A one-line message shown instead of (or alongside) notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// The notice for an outcome, or `None` when notes were produced.
pub fn notice(outcome: &Outcome) -> Option<Notice> {
    match outcome {
        Outcome::Notes(_) => None,
        Outcome::Locked => Some(Notice::new(NoticeLevel::Info, MISSING_CREDENTIAL_NOTICE)),
        Outcome::EmptyTranscript => Some(Notice::new(NoticeLevel::Warning, EMPTY_TRANSCRIPT_NOTICE)),
        Outcome::Failed(err) if err.is_parse_failure() => {
            Some(Notice::new(NoticeLevel::Error, PARSE_FAILURE_NOTICE))
        }
        Outcome::Failed(err) => Some(Notice::new(
            NoticeLevel::Error,
            format!("An error occurred: {}", err),
        )),
    }
}
