use ratatui::style::{Color, Modifier, Style};

/// Color palette and style constants for the TUI.
pub struct Theme;

impl Theme {
    // Tab bar
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tab_bar_bg() -> Style {
        Style::default().bg(Color::Black)
    }

    // Data table
    pub fn table_header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_cursor() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_row_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn table_row_selected() -> Style {
        Style::default().fg(Color::Black).bg(Color::LightCyan)
    }

    pub fn table_row_alt() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(25, 25, 30))
    }

    pub fn empty_icon() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_enabled() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_disabled() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    // Borders and panels
    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // Status bar
    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_loading() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn status_key_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // Toolbar
    pub fn search_active() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn search_inactive() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn filter_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
    }

    pub fn filter_set() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn filter_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn action_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // Help popup
    pub fn help_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_description() -> Style {
        Style::default().fg(Color::White)
    }

    // Record cells
    pub fn badge_good() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn badge_warn() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn badge_bad() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn badge_neutral() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn field_name() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}
