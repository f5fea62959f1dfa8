use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::event::{Action, AppMessage};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;

use super::Component;

const POPUP_WIDTH: u16 = 72;
const POPUP_HEIGHT: u16 = 20;
const POPUP_MARGIN: u16 = 4;
const NAME_WIDTH: usize = 16;

/// Read-only view of every field of one record.
pub struct DetailPopup {
    pub visible: bool,
    title: String,
    fields: Vec<(String, String)>,
    scroll: u16,
}

impl DetailPopup {
    pub fn new() -> Self {
        Self {
            visible: false,
            title: String::new(),
            fields: vec![],
            scroll: 0,
        }
    }

    pub fn show(&mut self, title: String, fields: Vec<(String, String)>) {
        self.title = title;
        self.fields = fields;
        self.scroll = 0;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Component for DetailPopup {
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.visible {
            return None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.hide(),
            KeyCode::Down | KeyCode::Char('j') => {
                if (self.scroll as usize) + 1 < self.fields.len() {
                    self.scroll += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
        None
    }

    fn handle_message(&mut self, _msg: &AppMessage) -> Option<Action> {
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        if !self.visible {
            return;
        }

        let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT, POPUP_MARGIN);
        frame.render_widget(Clear, popup);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::styled(format!(" {:w$} ", name, w = NAME_WIDTH), Theme::field_name()),
                    Span::styled(value.clone(), Theme::value()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} (Esc to close) ", self.title))
            .border_style(Theme::border_focused());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn show_resets_scroll_and_escape_hides() {
        let mut popup = DetailPopup::new();
        popup.show(
            "u001".into(),
            vec![("name".into(), "Amy".into()), ("role".into(), "admin".into())],
        );
        assert!(popup.visible);
        popup.handle_key(key(KeyCode::Down));
        assert_eq!(popup.scroll, 1);
        popup.handle_key(key(KeyCode::Down));
        assert_eq!(popup.scroll, 1);

        popup.show("u002".into(), vec![]);
        assert_eq!(popup.scroll, 0);

        popup.handle_key(key(KeyCode::Esc));
        assert!(!popup.visible);
    }
}
