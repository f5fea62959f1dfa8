/// Page-window arithmetic for a table.
///
/// `current_page` is 1-based and always lies in `[1, total_pages()]`;
/// an empty data set still has one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    /// A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn end_index(&self) -> usize {
        (self.start_index() + self.page_size).min(self.total_items)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Jump to `page`, clamped into range. Returns the page actually shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    pub fn next(&mut self) -> usize {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Update the item count, pulling the current page back into range.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.go_to_page(self.current_page);
    }

    /// Visible slice of a `total_items`-long list.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.start_index().min(self.total_items)..self.end_index()
    }

    pub fn summary(&self) -> String {
        let first = if self.total_items == 0 {
            0
        } else {
            self.start_index() + 1
        };
        format!(
            "Showing {} to {} of {} results",
            first,
            self.end_index(),
            self.total_items
        )
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(total: usize, size: usize, page: usize) -> Pagination {
        let mut p = Pagination::new(size);
        p.set_total_items(total);
        p.go_to_page(page);
        p
    }

    #[test]
    fn last_partial_page_window() {
        let p = paged(23, 10, 3);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.window(), 20..23);
        assert_eq!(p.summary(), "Showing 21 to 23 of 23 results");
        assert_eq!(p.page_label(), "Page 3 of 3");
    }

    #[test]
    fn boundaries_disable_navigation() {
        let first = paged(23, 10, 1);
        assert!(!first.can_go_previous());
        assert!(first.can_go_next());

        let last = paged(23, 10, 3);
        assert!(last.can_go_previous());
        assert!(!last.can_go_next());

        let single = paged(7, 10, 1);
        assert!(!single.can_go_previous() && !single.can_go_next());
        assert_eq!(single.total_pages(), 1);
    }

    #[test]
    fn go_to_page_clamps() {
        let mut p = paged(23, 10, 1);
        assert_eq!(p.go_to_page(0), 1);
        assert_eq!(p.go_to_page(99), 3);
        assert_eq!(p.next(), 3);
        assert_eq!(p.previous(), 2);
        assert_eq!(p.previous(), 1);
        assert_eq!(p.previous(), 1);
    }

    #[test]
    fn shrinking_total_pulls_page_back() {
        let mut p = paged(50, 10, 5);
        p.set_total_items(12);
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.window(), 10..12);
    }

    #[test]
    fn empty_set_has_one_empty_page() {
        let p = paged(0, 10, 4);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.window(), 0..0);
        assert_eq!(p.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn zero_page_size_is_one() {
        let p = Pagination::new(0);
        assert_eq!(p.page_size(), 1);
    }
}
