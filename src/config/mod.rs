//! Configuration module for smart-notes
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{GeneralSettings, LlmSettings, Settings};
