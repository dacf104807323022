//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::notes::ParsePolicy;

/// Environment variables consulted (in order) when no api key is configured.
const API_KEY_ENV_VARS: [&str; 2] = ["SMART_NOTES_GROQ_API_KEY", "GROQ_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Completion endpoint settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (groq)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key used when none is entered interactively
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API base URL (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// How to treat model output that is not a bare JSON object
    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "groq".to_string()
}

fn default_llm_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load settings from an explicit path, falling back to defaults when it is absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let lookup = |name: &str| std::env::var(name).ok();

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides(lookup);
            return Ok(settings);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides(lookup);

        Ok(settings)
    }

    /// Fill an empty api key from the environment. The environment is only read.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.llm.api_key.trim().is_empty() {
            return;
        }

        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|key| !key.trim().is_empty())
        {
            self.llm.api_key = key;
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "smart-notes", "smart-notes")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        Self::default().save(path)
    }

    /// Serialize these settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Update a single dotted key, e.g. `llm.model`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "general.log_level" => self.general.log_level = value.to_string(),
            "llm.provider" => self.llm.provider = value.to_string(),
            "llm.api_key" => self.llm.api_key = value.to_string(),
            "llm.model" => self.llm.model = value.to_string(),
            "llm.endpoint" => self.llm.endpoint = value.to_string(),
            "llm.parse_policy" => self.llm.parse_policy = value.parse()?,
            other => anyhow::bail!(
                "Unknown config key '{}'. Known keys: general.log_level, llm.provider, \
llm.api_key, llm.model, llm.endpoint, llm.parse_policy",
                other
            ),
        }
        Ok(())
    }

    /// Copy of these settings that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.llm.api_key.is_empty() {
            copy.llm.api_key = "********".to_string();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_llama_33_70b() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(settings.llm.provider, "groq");
        assert_eq!(settings.llm.parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[llm]\nmodel = \"other\"\n").unwrap();
        assert_eq!(settings.llm.model, "other");
        assert_eq!(settings.llm.provider, "groq");
        assert_eq!(settings.general.log_level, "info");
    }

    #[test]
    fn env_fills_missing_key_in_order() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| match name {
            "SMART_NOTES_GROQ_API_KEY" => Some("  ".to_string()),
            "GROQ_API_KEY" => Some("gsk_env".to_string()),
            _ => None,
        });
        assert_eq!(settings.llm.api_key, "gsk_env");
    }

    #[test]
    fn env_does_not_override_configured_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = "from-file".to_string();
        settings.apply_env_overrides(|_| Some("from-env".to_string()));
        assert_eq!(settings.llm.api_key, "from-file");
    }

    #[test]
    fn set_value_updates_known_keys() {
        let mut settings = Settings::default();
        settings.set_value("llm.parse_policy", "strip_fences").unwrap();
        settings.set_value("llm.endpoint", "http://localhost:8080/v1").unwrap();
        assert_eq!(settings.llm.parse_policy, ParsePolicy::StripFences);
        assert_eq!(settings.llm.endpoint, "http://localhost:8080/v1");
    }

    #[test]
    fn set_value_rejects_unknown_key_and_bad_policy() {
        let mut settings = Settings::default();
        assert!(settings.set_value("llm.temperature", "1.0").is_err());
        assert!(settings.set_value("llm.parse_policy", "lenient").is_err());
    }

    #[test]
    fn redacted_hides_api_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = "gsk_secret".to_string();
        let shown = toml::to_string_pretty(&settings.redacted()).unwrap();
        assert!(!shown.contains("gsk_secret"));
        assert_eq!(settings.llm.api_key, "gsk_secret");
    }

    #[test]
    fn save_then_load_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.llm.model = "llama-3.1-8b-instant".to_string();
        settings.save(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.llm.model, "llama-3.1-8b-instant");
    }
}
