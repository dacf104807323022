//! Notes screen - transcript input and the three result columns

use chrono::{DateTime, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::notes::presenter::{self, Notice, NoticeLevel, SectionBody};
use crate::notes::upload::{UploadCheck, ACCEPTED_AUDIO_EXTENSIONS, UPLOAD_NOTICE};
use crate::notes::{AnalysisResult, Outcome};

/// Which input tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTab {
    Transcript,
    Upload,
}

/// Line shown between the input and the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Analyzing,
    Notice(Notice),
    Generated(DateTime<Local>),
}

/// Notes screen state
pub struct NotesScreen {
    tab: InputTab,
    upload_path: String,
    upload_check: Option<UploadCheck>,
    status: Status,
    result: Option<AnalysisResult>,
    results_scroll: u16,
}

impl Default for NotesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesScreen {
    pub fn new() -> Self {
        Self {
            tab: InputTab::Transcript,
            upload_path: String::new(),
            upload_check: None,
            status: Status::Idle,
            result: None,
            results_scroll: 0,
        }
    }

    pub fn tab(&self) -> InputTab {
        self.tab
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            InputTab::Transcript => InputTab::Upload,
            InputTab::Upload => InputTab::Transcript,
        };
    }

    pub fn push_upload(&mut self, c: char) {
        if !c.is_control() {
            self.upload_path.push(c);
        }
    }

    pub fn backspace_upload(&mut self) {
        self.upload_path.pop();
    }

    pub fn upload_path(&self) -> &str {
        self.upload_path.trim()
    }

    pub fn set_upload_check(&mut self, check: UploadCheck) {
        self.upload_check = Some(check);
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Replace whatever was shown with the outcome of the latest trigger.
    pub fn show_outcome(&mut self, outcome: Outcome) {
        self.results_scroll = 0;
        self.status = match presenter::notice(&outcome) {
            Some(notice) => Status::Notice(notice),
            None => Status::Generated(Local::now()),
        };
        self.result = match outcome {
            Outcome::Notes(result) => Some(result),
            _ => None,
        };
    }

    pub fn scroll_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, transcript: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Tabs
                Constraint::Percentage(40), // Input
                Constraint::Length(3),      // Status
                Constraint::Min(6),         // Results
                Constraint::Length(1),      // Help bar
            ])
            .split(area);

        let selected = match self.tab {
            InputTab::Transcript => 0,
            InputTab::Upload => 1,
        };
        let tabs = Tabs::new(vec!["Paste Transcript", "Upload Audio"])
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).bold())
            .block(
                Block::default()
                    .title(" Smart Meeting Notes ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(tabs, chunks[0]);

        match self.tab {
            InputTab::Transcript => self.draw_transcript(frame, chunks[1], transcript),
            InputTab::Upload => self.draw_upload(frame, chunks[1]),
        }

        self.draw_status(frame, chunks[2]);
        self.draw_results(frame, chunks[3]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Ctrl+G ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Generate  "),
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Switch tab  "),
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll notes  "),
            Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    fn draw_transcript(&self, frame: &mut Frame, area: Rect, transcript: &str) {
        let block = Block::default()
            .title(" Paste your meeting transcript here: ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        if transcript.is_empty() {
            let hint = Paragraph::new(Span::styled(
                "Type or paste a transcript, then press Ctrl+G to generate notes.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        // Keep the end of the transcript (where typing happens) in view.
        let mut line_count = transcript.lines().count();
        if transcript.ends_with('\n') {
            line_count += 1;
        }
        let visible = area.height.saturating_sub(2) as usize;
        let offset = line_count.saturating_sub(visible) as u16;

        let text = Paragraph::new(transcript).scroll((offset, 0)).block(block);
        frame.render_widget(text, area);
    }

    fn draw_upload(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(UPLOAD_NOTICE, Style::default().fg(Color::Cyan))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Audio file: ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.upload_path.as_str()),
            ]),
            Line::from(Span::styled(
                format!("Accepted types: {}", ACCEPTED_AUDIO_EXTENSIONS.join(", ")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        if let Some(check) = &self.upload_check {
            let color = match check {
                UploadCheck::Accepted { .. } => Color::Green,
                _ => Color::Red,
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                check.notice(),
                Style::default().fg(color),
            )));
        }

        let upload = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Upload audio file ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(upload, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Status::Idle => Line::from(Span::styled("Ready", Style::default().fg(Color::DarkGray))),
            Status::Analyzing => Line::from(Span::styled(
                "Analyzing meeting transcript...",
                Style::default().fg(Color::Yellow).bold(),
            )),
            Status::Notice(notice) => {
                let color = match notice.level {
                    NoticeLevel::Info => Color::Green,
                    NoticeLevel::Warning => Color::Yellow,
                    NoticeLevel::Error => Color::Red,
                };
                Line::from(Span::styled(
                    notice.message.as_str(),
                    Style::default().fg(color),
                ))
            }
            Status::Generated(at) => Line::from(Span::styled(
                format!("Notes generated at {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::Green),
            )),
        };

        let status = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let Some(result) = &self.result else {
            let empty = Paragraph::new(Span::styled(
                "Notes will appear here.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().title(" Notes ").borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (section, column) in presenter::sections(result).iter().zip(columns.iter()) {
            let lines: Vec<Line> = match section.body {
                SectionBody::Text(text) => text
                    .lines()
                    .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Green))))
                    .collect(),
                SectionBody::Bullets(items) => items
                    .iter()
                    .map(|item| Line::from(format!("- {}", item)))
                    .collect(),
                SectionBody::Placeholder(text) => vec![Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::DarkGray).italic(),
                ))],
            };

            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.results_scroll, 0))
                .block(
                    Block::default()
                        .title(format!(" {} ", section.title))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                );
            frame.render_widget(paragraph, *column);
        }
    }
}
