use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

use crate::ui::theme::Theme;

/// What a key press did to the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Text changed; the table must recompute.
    Changed,
    /// Cursor moved or nothing happened.
    Unchanged,
    /// Input mode ended.
    Done,
}

/// Single-line search input. Every edit is reported immediately, there is no submit step.
pub struct SearchBox {
    text: String,
    /// Cursor position in chars, not bytes.
    cursor: usize,
    editing: bool,
    placeholder: String,
}

impl SearchBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            editing: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.cursor = self.text.chars().count();
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SearchEdit {
        if !self.editing {
            return SearchEdit::Unchanged;
        }

        let len = self.text.chars().count();
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                SearchEdit::Done
            }
            KeyCode::Esc => {
                self.editing = false;
                if self.text.is_empty() {
                    return SearchEdit::Done;
                }
                self.text.clear();
                self.cursor = 0;
                SearchEdit::Changed
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return SearchEdit::Unchanged;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                SearchEdit::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return SearchEdit::Unchanged;
                }
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                SearchEdit::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                SearchEdit::Unchanged
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                SearchEdit::Unchanged
            }
            KeyCode::Home => {
                self.cursor = 0;
                SearchEdit::Unchanged
            }
            KeyCode::End => {
                self.cursor = len;
                SearchEdit::Unchanged
            }
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                SearchEdit::Changed
            }
            _ => SearchEdit::Unchanged,
        }
    }

    /// Spans for the toolbar, placing the terminal cursor when editing.
    pub fn spans(&self, frame: &mut Frame, area: Rect) -> Vec<Span<'static>> {
        let label = " Search: ";
        let mut spans = vec![Span::styled(label, Theme::label())];

        if self.text.is_empty() && !self.editing {
            spans.push(Span::styled(
                format!("{} (/)", self.placeholder),
                Theme::placeholder(),
            ));
        } else {
            let style = if self.editing {
                Theme::search_active()
            } else {
                Theme::search_inactive()
            };
            spans.push(Span::styled(self.text.clone(), style));
        }

        if self.editing {
            let prefix: String = self.text.chars().take(self.cursor).collect();
            let x = area.x + (Span::raw(label).width() + Span::raw(prefix).width()) as u16;
            if x < area.x + area.width {
                frame.set_cursor_position((x, area.y));
            }
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> SearchBox {
        let mut sb = SearchBox::new("Search...");
        sb.start_editing();
        for c in text.chars() {
            sb.handle_key(key(KeyCode::Char(c)));
        }
        sb
    }

    #[test]
    fn ignores_keys_when_not_editing() {
        let mut sb = SearchBox::new("Search...");
        assert_eq!(sb.handle_key(key(KeyCode::Char('a'))), SearchEdit::Unchanged);
        assert!(sb.text().is_empty());
    }

    #[test]
    fn every_keystroke_reports_change() {
        let mut sb = SearchBox::new("Search...");
        sb.start_editing();
        assert_eq!(sb.handle_key(key(KeyCode::Char('a'))), SearchEdit::Changed);
        assert_eq!(sb.handle_key(key(KeyCode::Char('m'))), SearchEdit::Changed);
        assert_eq!(sb.text(), "am");
    }

    #[test]
    fn editing_in_the_middle_handles_multibyte() {
        let mut sb = typed("José");
        sb.handle_key(key(KeyCode::Backspace));
        assert_eq!(sb.text(), "Jos");
        sb.handle_key(key(KeyCode::Home));
        sb.handle_key(key(KeyCode::Delete));
        assert_eq!(sb.text(), "os");
        sb.handle_key(key(KeyCode::End));
        sb.handle_key(key(KeyCode::Char('é')));
        assert_eq!(sb.text(), "osé");
        sb.handle_key(key(KeyCode::Left));
        sb.handle_key(key(KeyCode::Left));
        sb.handle_key(key(KeyCode::Char('x')));
        assert_eq!(sb.text(), "oxsé");
    }

    #[test]
    fn enter_keeps_text_and_leaves_input_mode() {
        let mut sb = typed("amy");
        assert_eq!(sb.handle_key(key(KeyCode::Enter)), SearchEdit::Done);
        assert!(!sb.is_editing());
        assert_eq!(sb.text(), "amy");
    }

    #[test]
    fn escape_clears_text() {
        let mut sb = typed("amy");
        assert_eq!(sb.handle_key(key(KeyCode::Esc)), SearchEdit::Changed);
        assert!(sb.text().is_empty());
        assert!(!sb.is_editing());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut sb = SearchBox::new("");
        sb.start_editing();
        assert_eq!(sb.handle_key(key(KeyCode::Backspace)), SearchEdit::Unchanged);
    }
}
