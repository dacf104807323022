//! Notes module for smart-notes
//!
//! The transcript → structured notes pipeline, its per-session context, and
//! how results are presented.

mod interpreter;
mod model;
pub mod presenter;
mod session;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use interpreter::{interpret, ParsePolicy};
pub use model::{AnalysisResult, Credential};
pub use session::{NotesPipeline, Outcome, Session};
