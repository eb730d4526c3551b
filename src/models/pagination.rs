use std::ops::Range;

use crate::config::TABLE;

/// Current page of a fixed-size paginated list. Every setter clamps, nothing panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    page_index: usize,
}

impl PageState {
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        TABLE.page_size
    }

    /// `ceil(row_count / page_size)`; zero rows means zero pages.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(TABLE.page_size)
    }

    pub fn set_page_index(&mut self, index: usize, row_count: usize) {
        let last = self.page_count(row_count).saturating_sub(1);
        self.page_index = index.min(last);
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }

    /// No-op on the first page.
    pub fn previous(&mut self) {
        if self.can_previous() {
            self.page_index -= 1;
        }
    }

    /// No-op on the last page.
    pub fn next(&mut self, row_count: usize) {
        if self.can_next(row_count) {
            self.page_index += 1;
        }
    }

    /// Rows of the current page, as a range into the sorted order.
    pub fn row_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page_index * TABLE.page_size).min(row_count);
        let end = (start + TABLE.page_size).min(row_count);
        start..end
    }

    /// Zero-based indices of the page links to show: one before the current page, two after.
    pub fn link_window(&self, row_count: usize) -> Range<usize> {
        let count = self.page_count(row_count);
        let start = self.page_index.saturating_sub(TABLE.window.before);
        let end = (self.page_index + TABLE.window.after + 1).min(count);
        start.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling() {
        let page = PageState::default();
        assert_eq!(page.page_count(0), 0);
        assert_eq!(page.page_count(1), 1);
        assert_eq!(page.page_count(10), 1);
        assert_eq!(page.page_count(11), 2);
        assert_eq!(page.page_count(95), 10);
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let mut page = PageState::default();
        page.set_page_index(99, 25);
        assert_eq!(page.page_index(), 2);
        page.set_page_index(3, 0);
        assert_eq!(page.page_index(), 0);
    }

    #[test]
    fn previous_and_next_stop_at_the_edges() {
        let mut page = PageState::default();
        assert!(!page.can_previous());
        page.previous();
        assert_eq!(page.page_index(), 0);

        page.set_page_index(2, 25);
        assert!(!page.can_next(25));
        page.next(25);
        assert_eq!(page.page_index(), 2);

        page.previous();
        assert_eq!(page.page_index(), 1);
        assert!(page.can_next(25));
    }

    #[test]
    fn no_rows_disables_both_controls() {
        let page = PageState::default();
        assert!(!page.can_previous());
        assert!(!page.can_next(0));
        assert_eq!(page.link_window(0), 0..0);
        assert_eq!(page.row_range(0), 0..0);
    }

    #[test]
    fn link_window_slides_with_current_page() {
        let mut page = PageState::default();
        assert_eq!(page.link_window(100), 0..3);
        page.set_page_index(1, 100);
        assert_eq!(page.link_window(100), 0..4);
        page.set_page_index(5, 100);
        assert_eq!(page.link_window(100), 4..8);
        page.set_page_index(9, 100);
        assert_eq!(page.link_window(100), 8..10);
    }

    #[test]
    fn last_page_range_is_partial() {
        let mut page = PageState::default();
        page.set_page_index(2, 23);
        assert_eq!(page.row_range(23), 20..23);
    }
}
