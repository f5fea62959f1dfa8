use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::event::{Action, AppMessage};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;

use super::Component;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 30;
const POPUP_MARGIN: u16 = 4;
const KEY_WIDTH: usize = 20;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    (
        "Global",
        &[
            ("1-5", "Users / Teachers / Invoices / Exams / Questions"),
            ("r", "Reload the store from disk"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Start typing; rows update on every key"),
            ("Enter", "Keep the search and leave the box"),
            ("Esc", "Clear the search"),
        ],
    ),
    (
        "Table",
        &[
            ("j/k  Up/Down", "Move between rows"),
            ("g / G", "First / last row on the page"),
            ("h/l  Left/Right", "Move the header cursor"),
            ("s", "Sort by that column (asc / desc)"),
            ("f", "Select the next filter"),
            ("Space / o", "Cycle the selected filter"),
            ("[ / ]  PgUp/PgDn", "Previous / next page"),
            ("Enter", "Show record details"),
        ],
    ),
    (
        "Questions",
        &[("a", "Approve the selected question"), ("x", "Reject it")],
    ),
];

pub struct HelpPopup {
    pub visible: bool,
    scroll: u16,
}

impl HelpPopup {
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll: 0,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(" Keyboard shortcuts", Theme::title())];
        for (title, bindings) in SECTIONS {
            lines.push(Line::raw(""));
            lines.push(Line::styled(format!(" {}", title), Theme::field_name()));
            lines.extend(bindings.iter().map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("   {:w$}", key, w = KEY_WIDTH), Theme::help_key()),
                    Span::styled(*desc, Theme::help_description()),
                ])
            }));
        }
        lines
    }

    fn max_scroll() -> u16 {
        let count = Self::lines().len();
        count.saturating_sub(1).min(u16::MAX as usize) as u16
    }
}

impl Component for HelpPopup {
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.visible {
            return None;
        }

        // Every key is swallowed while help is open.
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.visible = false;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(Self::max_scroll());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
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

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(Line::styled(" ?/Esc close  j/k scroll ", Theme::status_key_hint()))
            .border_style(Theme::border_focused());

        frame.render_widget(
            Paragraph::new(Self::lines())
                .block(block)
                .scroll((self.scroll, 0)),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press(popup: &mut HelpPopup, code: KeyCode) {
        popup.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn help_popup_toggle() {
        let mut popup = HelpPopup::new();
        assert!(!popup.visible);
        popup.toggle();
        assert!(popup.visible);
        popup.toggle();
        assert!(!popup.visible);
    }

    #[test]
    fn help_popup_escape_closes() {
        let mut popup = HelpPopup::new();
        popup.toggle();
        press(&mut popup, KeyCode::Esc);
        assert!(!popup.visible);
    }

    #[test]
    fn scroll_is_bounded_and_reset_on_open() {
        let mut popup = HelpPopup::new();
        popup.toggle();
        press(&mut popup, KeyCode::Char('k'));
        assert_eq!(popup.scroll, 0);
        for _ in 0..200 {
            press(&mut popup, KeyCode::Char('j'));
        }
        assert_eq!(popup.scroll, HelpPopup::max_scroll());

        popup.toggle();
        popup.toggle();
        assert_eq!(popup.scroll, 0);
    }

    #[test]
    fn sections_cover_table_controls() {
        let keys: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|(_, bindings)| bindings.iter().map(|(k, _)| *k))
            .collect();
        for key in ["/", "s", "f", "[ / ]  PgUp/PgDn", "a", "x"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn renders_section_titles() {
        let mut popup = HelpPopup::new();
        popup.toggle();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| popup.render(frame, frame.area(), true))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for title in ["Global", "Search", "Table", "Questions"] {
            assert!(text.contains(title), "missing {title}");
        }
    }
}
