//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::path::Path;

use crate::config::Settings;
use crate::notes::presenter::{Notice, NoticeLevel};
use crate::notes::upload::check_upload;
use crate::notes::{Credential, NotesPipeline, Session};
use crate::tui::screens::{CredentialScreen, InputTab, NotesScreen, Status};
use crate::tui::widgets::HelpPopup;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Credential,
    Notes,
}

/// Main application state
pub struct App {
    session: Session,
    pipeline: NotesPipeline,
    current_screen: AppScreen,
    show_help: bool,
    generate_requested: bool,

    // Screen states
    credential: CredentialScreen,
    notes: NotesScreen,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let pipeline = NotesPipeline::from_settings(settings)?;
        let credential = Credential::new(settings.llm.api_key.as_str());
        Ok(Self::with_pipeline(pipeline, credential))
    }

    /// App around an existing pipeline; a missing credential starts on the key screen.
    pub fn with_pipeline(pipeline: NotesPipeline, credential: Option<Credential>) -> Self {
        let session = Session::with_credential(credential);
        let current_screen = if session.is_unlocked() {
            AppScreen::Notes
        } else {
            AppScreen::Credential
        };

        tracing::debug!(session = %session.id(), "TUI session started");

        Self {
            session,
            pipeline,
            current_screen,
            show_help: false,
            generate_requested: false,
            credential: CredentialScreen::new(),
            notes: NotesScreen::new(),
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match self.current_screen {
            AppScreen::Credential => {
                self.credential.draw(frame, area);
            }
            AppScreen::Notes => {
                self.notes.draw(frame, area, self.session.transcript());
            }
        }

        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    pub fn current_screen(&self) -> AppScreen {
        self.current_screen
    }

    pub fn notes(&self) -> &NotesScreen {
        &self.notes
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.current_screen {
            AppScreen::Credential => self.handle_credential_key(key),
            AppScreen::Notes => self.handle_notes_key(key),
        }
    }

    /// Handle bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        match self.current_screen {
            AppScreen::Credential => self.credential.push_str(text.trim()),
            AppScreen::Notes => match self.notes.tab() {
                InputTab::Transcript => {
                    self.session
                        .transcript_mut()
                        .push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                }
                InputTab::Upload => text.trim().chars().for_each(|c| self.notes.push_upload(c)),
            },
        }
    }

    fn handle_credential_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let entered = self.credential.take_input();
                if self.session.set_credential(&entered) {
                    self.notes.set_status(Status::Notice(Notice {
                        level: NoticeLevel::Info,
                        message: "API Key accepted!".to_string(),
                    }));
                    self.current_screen = AppScreen::Notes;
                } else {
                    self.credential.reject();
                }
            }
            KeyCode::Backspace => self.credential.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.credential.push(c);
            }
            _ => {}
        }
    }

    fn handle_notes_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('g') if ctrl => self.request_generate(),
            KeyCode::F(5) => self.request_generate(),
            KeyCode::Char('k') if ctrl => {
                self.current_screen = AppScreen::Credential;
            }
            KeyCode::Char('l') if ctrl => {
                self.session.transcript_mut().clear();
                self.notes.set_status(Status::Idle);
            }
            KeyCode::Tab | KeyCode::BackTab => self.notes.toggle_tab(),
            KeyCode::Up => self.notes.scroll_up(),
            KeyCode::Down => self.notes.scroll_down(),
            _ => match self.notes.tab() {
                InputTab::Transcript => self.edit_transcript(key, ctrl),
                InputTab::Upload => self.edit_upload(key, ctrl),
            },
        }
    }

    fn edit_transcript(&mut self, key: KeyEvent, ctrl: bool) {
        let transcript = self.session.transcript_mut();
        match key.code {
            KeyCode::Char(c) if !ctrl => transcript.push(c),
            KeyCode::Enter => transcript.push('\n'),
            KeyCode::Backspace => {
                transcript.pop();
            }
            _ => {}
        }
    }

    fn edit_upload(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char(c) if !ctrl => self.notes.push_upload(c),
            KeyCode::Backspace => self.notes.backspace_upload(),
            KeyCode::Enter if !self.notes.upload_path().is_empty() => {
                let check = check_upload(Path::new(self.notes.upload_path()));
                self.notes.set_upload_check(check);
            }
            _ => {}
        }
    }

    /// Generation is only requested here; the event loop runs it after
    /// drawing the "Analyzing" status.
    fn request_generate(&mut self) {
        if self.notes.tab() != InputTab::Transcript {
            return;
        }
        self.notes.set_status(Status::Analyzing);
        self.generate_requested = true;
    }

    pub fn generate_requested(&self) -> bool {
        self.generate_requested
    }

    /// Run the pipeline for the current transcript. Blocks until the call returns.
    pub async fn generate(&mut self) {
        self.generate_requested = false;
        let outcome = self.pipeline.generate(&self.session).await;
        self.notes.show_outcome(outcome);
    }

    /// Handle back navigation
    pub fn handle_back(&mut self) {
        self.show_help = false;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        !self.show_help
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
