use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::groq::GroqClient;
use crate::notes::Credential;

/// A chat-completion endpoint that answers one prompt with raw text.
///
/// The credential is passed on every call so a client never holds
/// session-specific secrets.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, credential: &Credential, prompt: &str) -> crate::Result<String>;
}

/// Build a completion client from runtime settings.
pub fn build_client(settings: &Settings) -> Result<Box<dyn CompletionClient>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" => Ok(Box::new(GroqClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: groq",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_client(&settings) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn groq_client_builds_without_api_key() {
        let settings = Settings::default();
        assert!(build_client(&settings).is_ok());
    }
}
