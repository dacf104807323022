//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppScreen;

const CREDENTIAL_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Accept the key"),
    ("Bksp", "Delete last character"),
    ("Esc", "Quit application"),
];

const NOTES_SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+G", "Generate notes (also F5)"),
    ("Tab", "Switch transcript / upload tab"),
    ("Enter", "New line, or check the audio file"),
    ("Ctrl+L", "Clear the transcript"),
    ("Ctrl+K", "Change API key"),
    ("↑/↓", "Scroll notes"),
    ("Esc", "Quit application"),
];

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, screen: AppScreen) {
        // Centered, 60% width, 70% height
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let (title, shortcuts) = match screen {
            AppScreen::Credential => ("API Key Shortcuts", CREDENTIAL_SHORTCUTS),
            AppScreen::Notes => ("Notes Shortcuts", NOTES_SHORTCUTS),
        };

        let mut lines = vec![
            Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
        ];
        lines.extend(shortcuts.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<8}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
