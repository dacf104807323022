//! Credential screen - the only thing shown until an API key is entered

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::notes::presenter::MISSING_CREDENTIAL_NOTICE;

/// Credential screen state
#[derive(Default)]
pub struct CredentialScreen {
    input: String,
    rejected: bool,
}

impl CredentialScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
            self.rejected = false;
        }
    }

    pub fn push_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.push(c));
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Hand the entered key over, clearing the field.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn reject(&mut self) {
        self.rejected = true;
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Key input
                Constraint::Min(3),    // Guidance
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Smart Meeting Notes", Style::default().fg(Color::Cyan).bold()),
            Span::raw("  Transform meeting transcripts into actionable insights using AI."),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let masked = "•".repeat(self.input.chars().count());
        let input = Paragraph::new(masked).block(
            Block::default()
                .title(" Groq API Key ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(input, chunks[1]);

        let guidance_style = if self.rejected {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let guidance = Paragraph::new(vec![
            Line::from(Span::styled(MISSING_CREDENTIAL_NOTICE, guidance_style)),
            Line::from(""),
            Line::from(Span::styled(
                "Get a free Groq API Key at https://console.groq.com/keys",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(guidance, chunks[2]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Accept key  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}
