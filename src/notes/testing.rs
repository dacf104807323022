//! Test doubles for the completion endpoint

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::llm::CompletionClient;
use crate::notes::Credential;

/// Canned completion that records every (credential, prompt) it receives.
#[derive(Clone)]
pub struct StubClient {
    reply: crate::Result<String>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubClient {
    pub fn replying(reply: crate::Result<String>) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, credential: &Credential, prompt: &str) -> crate::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.expose().to_string(), prompt.to_string()));
        self.reply.clone()
    }
}
