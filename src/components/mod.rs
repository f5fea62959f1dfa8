pub mod detail_popup;
pub mod help_popup;
pub mod screens;
pub mod status_bar;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::event::{Action, AppMessage};

/// Trait implemented by all TUI components.
pub trait Component {
    /// Handle a key event. Returns an Action if the component wants the app to do something.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action>;

    /// Handle a message from a background task.
    fn handle_message(&mut self, msg: &AppMessage) -> Option<Action>;

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Whether this component is currently in text input mode (captures all keys).
    fn is_input_mode(&self) -> bool {
        false
    }
}

/// Record-type-erased view of a data table, so the app can drive whichever tab is active.
pub trait TablePanel: Component {
    fn go_to_page(&mut self, page: usize) -> usize;

    fn selected_key(&self) -> Option<String>;

    /// Key and `(field, value)` pairs of the selected record.
    fn selected_detail(&self) -> Option<(String, Vec<(String, String)>)>;

    /// `(visible, total)` record counts.
    fn counts(&self) -> (usize, usize);
}
