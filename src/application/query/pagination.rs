// SPDX-License-Identifier: MPL-2.0
//! AOI filtering and client-side pagination.
//!
//! The layer collection is owned by the map container and may change between
//! renders. Only the page index is kept here; filtered views and page slices
//! are derived again from the latest layers each time.

use crate::domain::layer::Layer;
use crate::domain::ui::{PageNumber, PageSize};
use std::ops::Range;

/// Returns the AOI layers of `layers`, preserving their order.
#[must_use]
pub fn filter_aois(layers: &[Layer]) -> Vec<&Layer> {
    layers.iter().filter(|layer| layer.is_aoi()).collect()
}

/// Pagination state snapshot for UI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-indexed).
    pub page: PageNumber,
    /// Number of pages needed for all items.
    pub page_count: usize,
    /// Number of items being paginated.
    pub item_count: usize,
    /// Whether the page selector should be shown.
    pub show_controls: bool,
}

/// Fixed-size page window over a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paginator {
    page: PageNumber,
    page_size: PageSize,
}

impl Paginator {
    /// Creates a paginator positioned on the first page.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: PageNumber::FIRST,
            page_size,
        }
    }

    /// Returns the current page.
    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns `ceil(item_count / page_size)`.
    #[must_use]
    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size.value())
    }

    /// Moves to `page`.
    ///
    /// No upper bound is applied: a page past the end selects an empty slice.
    pub fn jump(&mut self, page: PageNumber) {
        self.page = page;
    }

    /// Clamps the current page to the last valid page for `item_count` items.
    ///
    /// Returns `true` if the page changed.
    pub fn clamp_to(&mut self, item_count: usize) -> bool {
        let last = PageNumber::new(self.page_count(item_count));
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Returns the index range of the current page, truncated to `item_count`.
    #[must_use]
    pub fn current_range(&self, item_count: usize) -> Range<usize> {
        let size = self.page_size.value();
        let start = self.page.index().saturating_mul(size).min(item_count);
        let end = self.page.value().saturating_mul(size).min(item_count);
        start..end
    }

    /// Returns the items of the current page.
    #[must_use]
    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.current_range(items.len())]
    }

    /// Returns whether there are more items than fit on one page.
    #[must_use]
    pub fn needs_controls(&self, item_count: usize) -> bool {
        item_count > self.page_size.value()
    }

    /// Returns a snapshot of the pagination state for `item_count` items.
    #[must_use]
    pub fn info(&self, item_count: usize) -> PageInfo {
        PageInfo {
            page: self.page,
            page_count: self.page_count(item_count),
            item_count,
            show_controls: self.needs_controls(item_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{aoi_layer, label_layer};

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn filter_keeps_only_aois_in_order() {
        let layers = vec![
            aoi_layer("1", "a1"),
            label_layer("2"),
            aoi_layer("3", "a3"),
            label_layer("4"),
            aoi_layer("5", "a5"),
        ];

        let ids: Vec<&str> = filter_aois(&layers)
            .into_iter()
            .map(|layer| layer.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn filter_of_empty_collection_is_empty() {
        assert!(filter_aois(&[]).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        let paginator = Paginator::default();
        assert_eq!(paginator.page_count(0), 0);
        assert_eq!(paginator.page_count(5), 1);
        assert_eq!(paginator.page_count(6), 2);
        assert_eq!(paginator.page_count(12), 3);
    }

    #[test]
    fn pages_slice_the_filtered_items() {
        let items = numbers(12);
        let mut paginator = Paginator::default();

        assert_eq!(paginator.current_items(&items), &[0, 1, 2, 3, 4]);

        paginator.jump(PageNumber::new(2));
        assert_eq!(paginator.current_items(&items), &[5, 6, 7, 8, 9]);

        paginator.jump(PageNumber::new(3));
        assert_eq!(paginator.current_items(&items), &[10, 11]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = numbers(7);
        let mut paginator = Paginator::default();
        paginator.jump(PageNumber::new(4));

        assert!(paginator.current_items(&items).is_empty());
        assert_eq!(paginator.current_range(items.len()), 7..7);
    }

    #[test]
    fn controls_only_shown_when_items_exceed_page_size() {
        let paginator = Paginator::default();
        assert!(!paginator.needs_controls(0));
        assert!(!paginator.needs_controls(5));
        assert!(paginator.needs_controls(6));
    }

    #[test]
    fn clamp_moves_to_last_valid_page_after_shrink() {
        let mut paginator = Paginator::default();
        paginator.jump(PageNumber::new(3));

        assert!(paginator.clamp_to(7));
        assert_eq!(paginator.page(), PageNumber::new(2));

        assert!(!paginator.clamp_to(7));
    }

    #[test]
    fn clamp_on_empty_list_returns_to_first_page() {
        let mut paginator = Paginator::default();
        paginator.jump(PageNumber::new(2));

        paginator.clamp_to(0);
        assert_eq!(paginator.page(), PageNumber::FIRST);
    }

    #[test]
    fn custom_page_size_is_respected() {
        let items = numbers(10);
        let mut paginator = Paginator::new(PageSize::new(3));
        paginator.jump(PageNumber::new(4));

        assert_eq!(paginator.page_count(items.len()), 4);
        assert_eq!(paginator.current_items(&items), &[9]);
    }

    #[test]
    fn info_reports_state() {
        let mut paginator = Paginator::default();
        paginator.jump(PageNumber::new(2));

        let info = paginator.info(12);
        assert_eq!(info.page, PageNumber::new(2));
        assert_eq!(info.page_count, 3);
        assert_eq!(info.item_count, 12);
        assert!(info.show_controls);
    }
}
