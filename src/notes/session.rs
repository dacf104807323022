//! Per-session context and the generate pipeline

use tracing::Instrument;
use uuid::Uuid;

use crate::config::Settings;
use crate::llm::{build_client, build_notes_prompt, CompletionClient};
use crate::notes::{interpret, AnalysisResult, Credential, ParsePolicy};
use crate::AnalysisError;

/// Everything one user has entered. Sessions never share state.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    credential: Option<Credential>,
    transcript: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            credential: None,
            transcript: String::new(),
        }
    }

    pub fn with_credential(credential: Option<Credential>) -> Self {
        Self {
            credential,
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Store the credential; a blank entry leaves the session locked.
    pub fn set_credential(&mut self, raw: &str) -> bool {
        self.credential = Credential::new(raw);
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_unlocked(&self) -> bool {
        self.credential.is_some()
    }

    pub fn set_transcript(&mut self, transcript: impl Into<String>) {
        self.transcript = transcript.into();
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut String {
        &mut self.transcript
    }
}

/// Result of one "generate" trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Notes(AnalysisResult),
    /// No credential yet; nothing was built or sent.
    Locked,
    /// Nothing to analyze; nothing was sent.
    EmptyTranscript,
    Failed(AnalysisError),
}

/// Prompt → completion → parse, for any session.
pub struct NotesPipeline {
    client: Box<dyn CompletionClient>,
    policy: ParsePolicy,
}

impl NotesPipeline {
    pub fn new(client: Box<dyn CompletionClient>, policy: ParsePolicy) -> Self {
        Self { client, policy }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::new(build_client(settings)?, settings.llm.parse_policy))
    }

    /// Run the gates, then the pipeline, for the session's current transcript.
    pub async fn generate(&self, session: &Session) -> Outcome {
        let Some(credential) = session.credential() else {
            return Outcome::Locked;
        };

        if session.transcript().trim().is_empty() {
            return Outcome::EmptyTranscript;
        }

        let span = tracing::info_span!("generate", session = %session.id());
        match self
            .analyze(credential, session.transcript())
            .instrument(span)
            .await
        {
            Ok(result) => Outcome::Notes(result),
            Err(err) => Outcome::Failed(err),
        }
    }

    /// Build the prompt, call the endpoint once, and interpret the reply.
    pub async fn analyze(
        &self,
        credential: &Credential,
        transcript: &str,
    ) -> crate::Result<AnalysisResult> {
        tracing::info!(transcript_chars = transcript.len(), "Analyzing meeting transcript");

        let prompt = build_notes_prompt(transcript);
        let raw = self.client.complete(credential, &prompt).await.map_err(|err| {
            tracing::warn!(error = %err, "Completion request failed");
            err
        })?;

        let result = interpret(&raw, self.policy).map_err(|err| {
            tracing::warn!(error = %err, policy = %self.policy, "Could not parse completion");
            err
        })?;

        tracing::info!(
            action_items = result.action_items.len(),
            follow_ups = result.follow_ups.len(),
            "Notes generated"
        );
        Ok(result)
    }
}
