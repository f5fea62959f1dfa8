use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::event::{Action, AppMessage};
use crate::ui::theme::Theme;

use super::Component;

const ERROR_DISPLAY_MAX_CHARS: usize = 48;
const ERROR_TRUNCATED_CHARS: usize = ERROR_DISPLAY_MAX_CHARS - 3; // room for "..."

pub struct StatusBar {
    pub visible_rows: usize,
    pub total_rows: usize,
    pub loading_message: Option<String>,
    pub error_message: Option<String>,
    pub notice: Option<String>,
    store_path: String,
}

impl StatusBar {
    pub fn new(store_path: impl Into<String>) -> Self {
        Self {
            visible_rows: 0,
            total_rows: 0,
            loading_message: None,
            error_message: None,
            notice: None,
            store_path: store_path.into(),
        }
    }

    pub fn set_counts(&mut self, (visible, total): (usize, usize)) {
        self.visible_rows = visible;
        self.total_rows = total;
    }

    pub fn set_error(&mut self, err: impl Into<String>) {
        self.error_message = Some(err.into());
        self.notice = None;
    }

    fn row_text(&self) -> String {
        if self.visible_rows == self.total_rows {
            format!(" Rows: {}", self.total_rows)
        } else {
            format!(" Rows: {}/{} (filtered)", self.visible_rows, self.total_rows)
        }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > ERROR_DISPLAY_MAX_CHARS {
        let head: String = text.chars().take(ERROR_TRUNCATED_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn handle_message(&mut self, msg: &AppMessage) -> Option<Action> {
        match msg {
            AppMessage::LoadingStarted(msg) => {
                self.loading_message = Some(msg.clone());
                self.error_message = None;
                self.notice = None;
            }
            AppMessage::LoadingFinished => {
                self.loading_message = None;
            }
            AppMessage::StoreReady(_) => {
                self.error_message = None;
            }
            AppMessage::Saved => {
                self.notice = Some("Saved".to_string());
            }
            AppMessage::Error(err) => {
                self.set_error(err.clone());
                self.loading_message = None;
            }
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans = vec![
            Span::styled(self.row_text(), Theme::status_bar()),
            Span::styled(format!(" | {}", self.store_path), Theme::status_bar()),
        ];

        if let Some(ref err) = self.error_message {
            spans.push(Span::styled(
                format!(" | Error: {}", truncate(err)),
                Theme::status_error(),
            ));
        } else if let Some(ref msg) = self.loading_message {
            spans.push(Span::styled(
                format!(" | Loading: {}", msg),
                Theme::status_loading(),
            ));
        } else if let Some(ref notice) = self.notice {
            spans.push(Span::styled(format!(" | {}", notice), Theme::status_bar()));
        }

        // Right-aligned key hints
        let hints = " q:quit ?:help ";
        let used_width: usize = spans.iter().map(|s| s.width()).sum();
        let remaining = area.width as usize - used_width.min(area.width as usize);
        if remaining > hints.len() {
            let padding = " ".repeat(remaining - hints.len());
            spans.push(Span::styled(padding, Theme::status_bar()));
            spans.push(Span::styled(hints, Theme::status_key_hint()));
        }

        let line = Line::from(spans);
        // Fill entire status bar background
        let bar = ratatui::widgets::Paragraph::new(line).style(Theme::status_bar());
        frame.render_widget(bar, area);
    }
}
