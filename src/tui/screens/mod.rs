//! TUI screens

mod credential;
mod notes;

pub use credential::CredentialScreen;
pub use notes::{InputTab, NotesScreen, Status};
