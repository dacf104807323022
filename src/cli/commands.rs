//! CLI command implementations

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommand, OutputFormat};
use crate::config::Settings;
use crate::notes::presenter::{self, MISSING_CREDENTIAL_NOTICE};
use crate::notes::upload::{check_upload, UploadCheck};
use crate::notes::{AnalysisResult, Credential, NotesPipeline, Outcome, Session};

#[derive(Serialize)]
struct NotesReport<'a> {
    generated_at: DateTime<Local>,
    model: &'a str,
    #[serde(flatten)]
    notes: &'a AnalysisResult,
}

/// Generate notes for a transcript file (or stdin) and print them
pub async fn generate_notes(
    settings: &Settings,
    file: Option<PathBuf>,
    api_key: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let credential = api_key
        .and_then(Credential::new)
        .or_else(|| Credential::new(settings.llm.api_key.as_str()));

    let mut session = Session::with_credential(credential);
    if !session.is_unlocked() {
        anyhow::bail!(
            "{} Pass --api-key, set llm.api_key in config, or export GROQ_API_KEY.",
            MISSING_CREDENTIAL_NOTICE
        );
    }

    session.set_transcript(read_transcript(file.as_deref())?);

    let pipeline = NotesPipeline::from_settings(settings)?;
    let outcome = pipeline.generate(&session).await;

    match outcome {
        Outcome::Notes(notes) => match format {
            OutputFormat::Text => print!("{}", presenter::render_text(&notes)),
            OutputFormat::Json => {
                let report = NotesReport {
                    generated_at: Local::now(),
                    model: &settings.llm.model,
                    notes: &notes,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        },
        Outcome::EmptyTranscript => {
            eprintln!("{}", presenter::EMPTY_TRANSCRIPT_NOTICE);
        }
        Outcome::Locked => anyhow::bail!("{}", MISSING_CREDENTIAL_NOTICE),
        Outcome::Failed(err) if err.is_parse_failure() => {
            return Err(anyhow::Error::new(err).context(presenter::PARSE_FAILURE_NOTICE));
        }
        Outcome::Failed(err) => anyhow::bail!("An error occurred: {}", err),
    }

    Ok(())
}

fn read_transcript(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display())),
        None => {
            let mut transcript = String::new();
            std::io::stdin()
                .read_to_string(&mut transcript)
                .context("Failed to read transcript from stdin")?;
            Ok(transcript)
        }
    }
}

/// Accept an audio file without processing it
pub fn upload_audio(file: &Path) -> Result<()> {
    match check_upload(file) {
        UploadCheck::Missing => anyhow::bail!("File not found: {}", file.display()),
        check @ UploadCheck::Unsupported { .. } => anyhow::bail!("{}", check.notice()),
        check @ UploadCheck::Accepted { .. } => println!("{}", check.notice()),
    }
    Ok(())
}

/// Configuration commands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommand::Set { key, value } => {
            let path = Settings::config_path()?;
            // Start from the file, not `settings`, so env overrides are not persisted.
            let mut stored: Settings = if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            } else {
                Settings::default()
            };

            stored.set_value(&key, &value)?;
            stored.save(&path)?;

            let shown = if key == "llm.api_key" {
                "********"
            } else {
                value.as_str()
            };
            println!("Set {} = {}", key, shown);
        }
    }

    Ok(())
}
