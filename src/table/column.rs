use std::cmp::Ordering;

use ratatui::layout::Constraint;
use ratatui::text::Line;

type Accessor<T> = Box<dyn Fn(&T) -> String>;
type CellRenderer<T> = Box<dyn Fn(&T) -> Line<'static>>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// One column of a [`DataTable`](super::DataTable).
///
/// A column is sortable only when it carries a comparator, so every sort
/// compares values of one known type.
pub struct Column<T> {
    pub key: &'static str,
    pub header: String,
    pub width: Constraint,
    accessor: Accessor<T>,
    cell: Option<CellRenderer<T>>,
    comparator: Option<Comparator<T>>,
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self {
            key,
            header: header.into(),
            width: Constraint::Fill(1),
            accessor: Box::new(accessor),
            cell: None,
            comparator: None,
        }
    }

    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    /// Replace the plain accessor text with a custom styled line.
    pub fn cell(mut self, render: impl Fn(&T) -> Line<'static> + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.comparator = Some(Box::new(compare));
        self
    }

    pub fn sort_by_key<K: Ord>(self, key: impl Fn(&T) -> K + 'static) -> Self {
        self.sort_by(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn is_sortable(&self) -> bool {
        self.comparator.is_some()
    }

    pub fn value(&self, item: &T) -> String {
        (self.accessor)(item)
    }

    pub fn render_cell(&self, item: &T) -> Line<'static> {
        match &self.cell {
            Some(render) => render(item),
            None => Line::raw(self.value(item)),
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        self.comparator.as_ref().map(|cmp| cmp(a, b))
    }
}
