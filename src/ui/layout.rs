use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout splits the terminal into: tab bar (top), content area (middle), status bar (bottom).
pub struct AppLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tab bar
                Constraint::Min(3),    // content area
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Toolbar + table + optional pagination footer.
pub struct TableLayout {
    pub toolbar: Rect,
    pub table: Rect,
    pub footer: Option<Rect>,
}

impl TableLayout {
    pub fn new(area: Rect, with_footer: bool) -> Self {
        let footer_height = if with_footer { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // toolbar
                Constraint::Min(3),                // table
                Constraint::Length(footer_height), // pagination
            ])
            .split(area);

        Self {
            toolbar: chunks[0],
            table: chunks[1],
            footer: with_footer.then_some(chunks[2]),
        }
    }
}

/// Centered popup rect, shrunk to fit small terminals.
pub fn centered(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(margin));
    let height = height.min(area.height.saturating_sub(margin));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}
