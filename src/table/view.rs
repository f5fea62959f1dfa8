use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use tracing::debug;

use crate::components::{Component, TablePanel};
use crate::event::{Action, AppMessage};
use crate::ui::layout::TableLayout;
use crate::ui::theme::Theme;

use super::column::Column;
use super::engine::{self, SearchIndex};
use super::filter::FilterDescriptor;
use super::pagination::Pagination;
use super::search_box::{SearchBox, SearchEdit};
use super::sort::SortDirective;
use super::{record_fields, Record, TableError};

const ROW_NUMBER_WIDTH: u16 = 5;
const OVERLAY_WIDTH: u16 = 24;
const OVERLAY_HEIGHT: u16 = 3;
const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Searchable, sortable, filterable and optionally paginated table over `T`.
///
/// The table owns the search text and sort directive. Records arrive
/// wholesale through [`DataTable::set_data`]; page changes are requested
/// through [`Action::PageChange`] and applied by the owner with
/// [`DataTable::go_to_page`].
pub struct DataTable<T: Record> {
    title: String,
    columns: Vec<Column<T>>,
    filters: Vec<FilterDescriptor<T>>,
    actions: Vec<(&'static str, &'static str)>,
    records: Vec<T>,
    index: SearchIndex,
    /// Indices into `records` after search, filters and sort.
    visible: Vec<usize>,
    search: SearchBox,
    searchable: bool,
    sort: SortDirective,
    pagination: Option<Pagination>,
    is_loading: bool,
    header_cursor: usize,
    active_filter: usize,
    table_state: TableState,
    selected_key: Option<String>,
    spinner_tick: usize,
}

impl<T: Record> DataTable<T> {
    pub fn new(title: impl Into<String>, columns: Vec<Column<T>>) -> Self {
        Self {
            title: title.into(),
            columns,
            filters: vec![],
            actions: vec![],
            records: vec![],
            index: SearchIndex::default(),
            visible: vec![],
            search: SearchBox::new("Search..."),
            searchable: true,
            sort: SortDirective::unsorted(),
            pagination: None,
            is_loading: false,
            header_cursor: 0,
            active_filter: 0,
            table_state: TableState::default(),
            selected_key: None,
            spinner_tick: 0,
        }
    }

    pub fn with_filters(mut self, filters: Vec<FilterDescriptor<T>>) -> Self {
        self.filters = filters;
        self.refresh();
        self
    }

    pub fn with_pagination(mut self, page_size: usize) -> Self {
        let mut pagination = Pagination::new(page_size);
        pagination.set_total_items(self.visible.len());
        self.pagination = Some(pagination);
        self.restore_selection();
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search.set_placeholder(placeholder);
        self
    }

    /// Key hints shown at the right edge of the toolbar.
    pub fn with_actions(mut self, actions: Vec<(&'static str, &'static str)>) -> Self {
        self.actions = actions;
        self
    }

    pub fn set_data(&mut self, records: Vec<T>) {
        self.index = SearchIndex::build(&records);
        self.records = records;
        self.refresh();
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn sort(&self) -> SortDirective {
        self.sort
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn filters(&self) -> &[FilterDescriptor<T>] {
        &self.filters
    }

    /// Every record that survives search and filters, in display order.
    pub fn visible_records(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&T> {
        self.page_indices().iter().map(|&i| &self.records[i]).collect()
    }

    pub fn selected_record(&self) -> Option<&T> {
        let pos = self.table_state.selected()?;
        let idx = *self.page_indices().get(pos)?;
        self.records.get(idx)
    }

    /// Header click on `field`. Unsortable or unknown columns are ignored.
    pub fn toggle_sort(&mut self, field: &str) -> Option<SortDirective> {
        let column = self
            .columns
            .iter()
            .find(|c| c.key == field && c.is_sortable())?;
        self.sort.toggle(column.key);
        self.refresh();
        Some(self.sort)
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<bool, TableError> {
        let filter = self
            .filters
            .iter_mut()
            .find(|f| f.key == key)
            .ok_or_else(|| TableError::UnknownFilter(key.to_string()))?;
        let changed = filter.set_value(value)?;
        if changed {
            self.on_query_changed();
        }
        Ok(changed)
    }

    /// Show `page`, clamped into range. Returns the page actually shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let Some(pagination) = self.pagination.as_mut() else {
            return 1;
        };
        let shown = pagination.go_to_page(page);
        self.selected_key = None;
        self.restore_selection();
        shown
    }

    fn on_query_changed(&mut self) {
        if let Some(p) = self.pagination.as_mut() {
            p.reset();
        }
        self.selected_key = None;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = engine::process_indexed(
            &self.records,
            &self.index,
            &self.columns,
            &self.filters,
            self.search.text(),
            &self.sort,
        );
        if let Some(p) = self.pagination.as_mut() {
            p.set_total_items(self.visible.len());
        }
        self.restore_selection();
        debug!(
            table = %self.title,
            visible = self.visible.len(),
            total = self.records.len(),
            "table recomputed"
        );
    }

    fn page_window(&self) -> Range<usize> {
        match &self.pagination {
            Some(p) => p.window(),
            None => 0..self.visible.len(),
        }
    }

    fn page_indices(&self) -> &[usize] {
        &self.visible[self.page_window()]
    }

    /// Keep the cursor on the same record when it is still on this page.
    fn restore_selection(&mut self) {
        let position = {
            let page = self.page_indices();
            if page.is_empty() {
                None
            } else {
                let found = self.selected_key.as_ref().and_then(|key| {
                    page.iter()
                        .position(|&i| self.records[i].key() == *key)
                });
                Some(found.unwrap_or(0))
            }
        };
        self.table_state.select(position);
        self.selected_key = self.selected_record().map(Record::key);
    }

    fn select_row(&mut self, pos: usize) {
        if self.page_indices().is_empty() {
            return;
        }
        let last = self.page_indices().len() - 1;
        self.table_state.select(Some(pos.min(last)));
        self.selected_key = self.selected_record().map(Record::key);
    }

    fn move_up(&mut self) {
        let i = self.table_state.selected().unwrap_or(0);
        self.select_row(i.saturating_sub(1));
    }

    fn move_down(&mut self) {
        let i = self.table_state.selected().unwrap_or(0);
        self.select_row(i + 1);
    }

    fn header_left(&mut self) {
        self.header_cursor = self.header_cursor.saturating_sub(1);
    }

    fn header_right(&mut self) {
        if self.header_cursor + 1 < self.columns.len() {
            self.header_cursor += 1;
        }
    }

    fn cycle_active_filter(&mut self) -> Option<Action> {
        let filter = self.filters.get_mut(self.active_filter)?;
        let value = filter.cycle().as_str().to_string();
        let key = filter.key;
        self.on_query_changed();
        Some(Action::FilterChanged { key, value })
    }

    fn request_page(&self, forward: bool) -> Option<Action> {
        let p = self.pagination.as_ref()?;
        if forward && p.can_go_next() {
            Some(Action::PageChange(p.current_page() + 1))
        } else if !forward && p.can_go_previous() {
            Some(Action::PageChange(p.current_page() - 1))
        } else {
            None
        }
    }

    // --- Rendering ---

    fn toolbar_line(&self, frame: &mut Frame, area: Rect, focused: bool) -> Line<'static> {
        let mut spans = Vec::new();
        if self.searchable {
            spans.extend(self.search.spans(frame, area));
        }

        for (i, filter) in self.filters.iter().enumerate() {
            let style = if focused && i == self.active_filter {
                Theme::filter_focused()
            } else if filter.is_active() {
                Theme::filter_set()
            } else {
                Theme::filter_inactive()
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{}: ", filter.label), Theme::label()));
            spans.push(Span::styled(
                format!("[{} ▾]", filter.current_label()),
                style,
            ));
        }

        let hints: String = self
            .actions
            .iter()
            .map(|(key, label)| format!(" {}:{}", key, label))
            .collect::<String>()
            + " ";
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let hint_width = Span::raw(hints.as_str()).width();
        let width = area.width as usize;
        if !self.actions.is_empty() && used + hint_width < width {
            spans.push(Span::raw(" ".repeat(width - used - hint_width)));
            spans.push(Span::styled(hints, Theme::action_hint()));
        }

        Line::from(spans)
    }

    fn header_row(&self, focused: bool) -> Row<'static> {
        let mut cells = vec![Cell::from("  #").style(Theme::table_header())];
        for (i, column) in self.columns.iter().enumerate() {
            let text = if column.is_sortable() {
                format!("{} {}", column.header, self.sort.glyph_for(column.key))
            } else {
                column.header.clone()
            };
            let style = if focused && i == self.header_cursor {
                Theme::header_cursor()
            } else {
                Theme::table_header()
            };
            cells.push(Cell::from(Text::from(text)).style(style));
        }
        Row::new(cells).height(1)
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        let offset = self.page_window().start;
        self.page_indices()
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                let record = &self.records[idx];
                let style = if i % 2 == 0 {
                    Theme::table_row_normal()
                } else {
                    Theme::table_row_alt()
                };
                let mut cells =
                    vec![Cell::from(format!("{:>4}", offset + i + 1)).style(style)];
                cells.extend(
                    self.columns
                        .iter()
                        .map(|c| Cell::from(c.render_cell(record)).style(style)),
                );
                Row::new(cells).height(1)
            })
            .collect()
    }

    fn empty_state(&self) -> Paragraph<'static> {
        let narrowed =
            !self.search.text().is_empty() || self.filters.iter().any(|f| f.is_active());
        let guidance = if narrowed {
            "Try a different search term or clear the filters."
        } else {
            "There is nothing to show yet."
        };
        Paragraph::new(vec![
            Line::raw(""),
            Line::styled("∅", Theme::empty_icon()),
            Line::styled("No records found", Theme::title()),
            Line::styled(guidance, Theme::placeholder()),
        ])
        .alignment(Alignment::Center)
    }

    fn footer_line(pagination: &Pagination) -> Line<'static> {
        let nav = |label: &'static str, enabled: bool| {
            Span::styled(
                label,
                if enabled {
                    Theme::nav_enabled()
                } else {
                    Theme::nav_disabled()
                },
            )
        };
        Line::from(vec![
            Span::styled(format!(" {}", pagination.summary()), Theme::value()),
            Span::raw("   "),
            nav("◀ Prev", pagination.can_go_previous()),
            Span::styled(format!("  {}  ", pagination.page_label()), Theme::label()),
            nav("Next ▶", pagination.can_go_next()),
        ])
    }

    fn render_loading_overlay(&self, frame: &mut Frame, body: Rect) {
        let width = OVERLAY_WIDTH.min(body.width);
        let height = OVERLAY_HEIGHT.min(body.height);
        let x = body.x + body.width.saturating_sub(width) / 2;
        let y = body.y + body.height.saturating_sub(height) / 2;
        let area = Rect::new(x, y, width, height);

        let spinner = SPINNER[self.spinner_tick % SPINNER.len()];
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(Line::styled(
            format!("{} Loading…", spinner),
            Theme::status_loading(),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_unfocused()),
        );
        frame.render_widget(overlay, area);
    }
}

impl<T: Record> Component for DataTable<T> {
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.search.is_editing() {
            if self.search.handle_key(key) == SearchEdit::Changed {
                self.on_query_changed();
            }
            return None;
        }

        match key.code {
            KeyCode::Char('/') if self.searchable => {
                self.search.start_editing();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Char('g') => {
                self.select_row(0);
                None
            }
            KeyCode::Char('G') => {
                self.select_row(usize::MAX);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.header_left();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.header_right();
                None
            }
            KeyCode::Char('s') => {
                let field = self.columns.get(self.header_cursor)?.key;
                self.toggle_sort(field).map(Action::SortChanged)
            }
            KeyCode::Char('f') => {
                if !self.filters.is_empty() {
                    self.active_filter = (self.active_filter + 1) % self.filters.len();
                }
                None
            }
            KeyCode::Char(' ') | KeyCode::Char('o') => self.cycle_active_filter(),
            KeyCode::Char('[') | KeyCode::PageUp => self.request_page(false),
            KeyCode::Char(']') | KeyCode::PageDown => self.request_page(true),
            KeyCode::Enter => self.selected_record().map(|r| Action::RowActivated(r.key())),
            _ => None,
        }
    }

    fn handle_message(&mut self, msg: &AppMessage) -> Option<Action> {
        match msg {
            AppMessage::LoadingStarted(_) => self.set_loading(true),
            AppMessage::LoadingFinished => self.set_loading(false),
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let layout = TableLayout::new(area, self.pagination.is_some());

        let toolbar = self.toolbar_line(frame, layout.toolbar, focused);
        frame.render_widget(Paragraph::new(toolbar), layout.toolbar);

        let mut widths = vec![Constraint::Length(ROW_NUMBER_WIDTH)];
        widths.extend(self.columns.iter().map(|c| c.width));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " {} ({} of {}) ",
                self.title,
                self.visible.len(),
                self.records.len()
            ))
            .border_style(if focused {
                Theme::border_focused()
            } else {
                Theme::border_unfocused()
            });
        let inner = block.inner(layout.table);
        let body = Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1),
        );

        let table = Table::new(self.body_rows(), &widths)
            .header(self.header_row(focused))
            .block(block)
            .row_highlight_style(Theme::table_row_selected());
        frame.render_stateful_widget(table, layout.table, &mut self.table_state);

        if self.visible.is_empty() {
            frame.render_widget(self.empty_state(), body);
        }

        if self.is_loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
            self.render_loading_overlay(frame, body);
        }

        if let (Some(pagination), Some(footer)) = (&self.pagination, layout.footer) {
            frame.render_widget(Paragraph::new(Self::footer_line(pagination)), footer);
        }
    }

    fn is_input_mode(&self) -> bool {
        self.search.is_editing()
    }
}

impl<T: Record> TablePanel for DataTable<T> {
    fn go_to_page(&mut self, page: usize) -> usize {
        DataTable::go_to_page(self, page)
    }

    fn selected_key(&self) -> Option<String> {
        self.selected_record().map(Record::key)
    }

    fn selected_detail(&self) -> Option<(String, Vec<(String, String)>)> {
        let record = self.selected_record()?;
        Some((record.key(), record_fields(record)))
    }

    fn counts(&self) -> (usize, usize) {
        (self.visible.len(), self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::filter::FilterOption;
    use crate::table::sort::SortDirection;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use serde::Serialize;

    #[derive(Debug, Clone, Serialize)]
    struct Person {
        id: u32,
        name: String,
        age: u32,
    }

    impl Record for Person {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn people(n: u32) -> Vec<Person> {
        (1..=n)
            .map(|id| Person {
                id,
                name: format!("Person {id}"),
                age: 20 + id % 5,
            })
            .collect()
    }

    fn table() -> DataTable<Person> {
        let columns = vec![
            Column::new("name", "Name", |p: &Person| p.name.clone())
                .sort_by_key(|p| p.name.clone()),
            Column::new("age", "Age", |p: &Person| p.age.to_string()).sort_by_key(|p| p.age),
            Column::new("id", "ID", |p: &Person| p.id.to_string()),
        ];
        DataTable::new("People", columns)
    }

    fn type_search(t: &mut DataTable<Person>, text: &str) {
        t.handle_key(key(KeyCode::Char('/')));
        for c in text.chars() {
            t.handle_key(key(KeyCode::Char(c)));
        }
        t.handle_key(key(KeyCode::Enter));
    }

    fn draw(t: &mut DataTable<Person>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| t.render(f, f.area(), true)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content()
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn names(t: &DataTable<Person>) -> Vec<String> {
        t.visible_records().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn typing_recomputes_on_every_keystroke() {
        let mut t = table();
        t.set_data(people(12));
        t.handle_key(key(KeyCode::Char('/')));
        assert!(t.is_input_mode());
        t.handle_key(key(KeyCode::Char('1')));
        // "Person 1", "Person 10", "Person 11", "Person 12" and the matching ids/ages.
        assert!(names(&t).contains(&"Person 1".to_string()));
        t.handle_key(key(KeyCode::Char('2')));
        assert_eq!(names(&t), vec!["Person 12"]);
        t.handle_key(key(KeyCode::Esc));
        assert_eq!(t.visible_records().len(), 12);
    }

    #[test]
    fn header_cursor_sorts_like_a_click() {
        let mut t = table();
        t.set_data(people(3));
        t.handle_key(key(KeyCode::Right));
        let action = t.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            action,
            Some(Action::SortChanged(SortDirective::by("age", SortDirection::Asc)))
        );
        t.handle_key(key(KeyCode::Char('s')));
        assert_eq!(t.sort(), SortDirective::by("age", SortDirection::Desc));

        t.handle_key(key(KeyCode::Left));
        t.handle_key(key(KeyCode::Char('s')));
        assert_eq!(t.sort(), SortDirective::by("name", SortDirection::Asc));
    }

    #[test]
    fn unsortable_header_does_nothing() {
        let mut t = table();
        t.set_data(people(3));
        assert_eq!(t.toggle_sort("id"), None);
        assert_eq!(t.sort(), SortDirective::unsorted());
    }

    #[test]
    fn search_resets_page_to_one() {
        let mut t = table().with_pagination(5);
        t.set_data(people(23));
        assert_eq!(t.go_to_page(4), 4);
        type_search(&mut t, "person 2");
        let p = t.pagination().unwrap();
        assert_eq!(p.current_page(), 1);
        // "Person 2" and "Person 20".."Person 23"
        assert_eq!(p.total_items(), 5);
    }

    #[test]
    fn page_requests_respect_boundaries() {
        let mut t = table().with_pagination(10);
        t.set_data(people(23));
        assert_eq!(t.handle_key(key(KeyCode::Char('['))), None);
        assert_eq!(t.handle_key(key(KeyCode::Char(']'))), Some(Action::PageChange(2)));

        t.go_to_page(3);
        assert_eq!(t.page_records().len(), 3);
        assert_eq!(t.page_records()[0].id, 21);
        assert_eq!(t.handle_key(key(KeyCode::PageDown)), None);
        assert_eq!(t.handle_key(key(KeyCode::PageUp)), Some(Action::PageChange(2)));
    }

    #[test]
    fn selection_follows_record_across_sort() {
        let mut t = table();
        t.set_data(people(3));
        t.handle_key(key(KeyCode::Down));
        assert_eq!(t.selected_record().map(|p| p.id), Some(2));
        t.toggle_sort("name");
        t.toggle_sort("name");
        assert_eq!(t.selected_record().map(|p| p.id), Some(2));
        assert_eq!(
            t.handle_key(key(KeyCode::Enter)),
            Some(Action::RowActivated("2".into()))
        );
    }

    #[test]
    fn filter_cycle_reports_change_and_applies() {
        let filter = FilterDescriptor::new(
            "age",
            "Age",
            vec![FilterOption::new("21", "21"), FilterOption::new("22", "22")],
            |p: &Person, v| p.age.to_string() == v,
        )
        .unwrap();
        let mut t = table().with_filters(vec![filter]).with_pagination(2);
        t.set_data(people(10));
        t.go_to_page(3);

        let action = t.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(
            action,
            Some(Action::FilterChanged {
                key: "age",
                value: "21".into()
            })
        );
        assert_eq!(names(&t), vec!["Person 1", "Person 6"]);
        assert_eq!(t.pagination().unwrap().current_page(), 1);

        assert_eq!(t.set_filter("age", "all"), Ok(true));
        assert_eq!(t.visible_records().len(), 10);
        assert!(t.set_filter("missing", "x").is_err());
    }

    #[test]
    fn renders_header_glyphs_and_footer() {
        let mut t = table().with_pagination(10);
        t.set_data(people(23));
        t.toggle_sort("age");
        t.go_to_page(3);
        let screen = draw(&mut t, 100, 20);
        assert!(screen.contains("Name ↕"));
        assert!(screen.contains("Age ▲"));
        assert!(screen.contains("Showing 21 to 23 of 23 results"));
        assert!(screen.contains("Page 3 of 3"));
        assert!(screen.contains("◀ Prev"));
        assert!(screen.contains("Next ▶"));
    }

    #[test]
    fn empty_state_replaces_rows() {
        let mut t = table().with_pagination(10);
        t.set_data(people(5));
        type_search(&mut t, "nobody");
        assert!(t.visible_records().is_empty());
        assert!(!t.is_loading());

        let screen = draw(&mut t, 100, 20);
        assert!(screen.contains("No records found"));
        assert!(screen.contains("Try a different search term"));
        assert!(!screen.contains("Person 1"));
        assert!(screen.contains("Showing 0 to 0 of 0 results"));
    }

    #[test]
    fn loading_overlay_keeps_rows() {
        let mut t = table();
        t.set_data(people(3));
        t.handle_message(&AppMessage::LoadingStarted("Loading store...".into()));
        assert!(t.is_loading());
        let screen = draw(&mut t, 100, 20);
        assert!(screen.contains("Loading…"));
        assert!(screen.contains("Person 1"));

        t.handle_message(&AppMessage::LoadingFinished);
        let screen = draw(&mut t, 100, 20);
        assert!(!screen.contains("Loading…"));
    }

    #[test]
    fn unpaginated_table_shows_all_rows_without_footer() {
        let mut t = table().searchable(false);
        t.set_data(people(4));
        assert_eq!(t.page_records().len(), 4);
        assert_eq!(t.handle_key(key(KeyCode::Char(']'))), None);
        t.handle_key(key(KeyCode::Char('/')));
        assert!(!t.is_input_mode());
        let screen = draw(&mut t, 100, 12);
        assert!(!screen.contains("Showing"));
        assert!(!screen.contains("Search:"));
    }

    #[test]
    fn toolbar_shows_placeholder_filters_and_actions() {
        let filter = FilterDescriptor::new(
            "age",
            "Age",
            vec![FilterOption::new("Twenty-one", "21")],
            |p: &Person, v| p.age.to_string() == v,
        )
        .unwrap();
        let mut t = table()
            .with_filters(vec![filter])
            .search_placeholder("Find people")
            .with_actions(vec![("n", "new")]);
        t.set_data(people(2));
        let screen = draw(&mut t, 100, 10);
        assert!(screen.contains("Find people (/)"));
        assert!(screen.contains("Age: [All ▾]"));
        assert!(screen.contains("n:new"));
    }

    #[test]
    fn detail_lists_every_field() {
        let mut t = table();
        t.set_data(people(1));
        let (key, fields) = t.selected_detail().unwrap();
        assert_eq!(key, "1");
        assert_eq!(fields.len(), 3);
        assert_eq!(t.counts(), (1, 1));
    }
}
