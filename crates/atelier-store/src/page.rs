// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page cursor over a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// "Showing start-end of total" summary, with a 1-based start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl std::fmt::Display for PageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {}-{} of {}", self.start, self.end, self.total)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 0,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` items; never zero.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page
            .saturating_add(1)
            .saturating_mul(self.page_size)
            < total
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Jumps to `page`, clamped to the last page for `total` items.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pulls the cursor back when the list shrank under it.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    /// The items on the current page; empty when the page is past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn info(&self, total: usize) -> PageInfo {
        let offset = self.offset().min(total);
        let end = offset.saturating_add(self.page_size).min(total);
        PageInfo {
            start: if end > offset { offset + 1 } else { 0 },
            end,
            total,
        }
    }

    // Saturates so an out-of-range page reads as past the end.
    fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{PageInfo, Paginator};
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(25, 3)]
    fn page_count_rounds_up(#[case] total: usize, #[case] expected: usize) {
        assert_eq!(Paginator::new(10).page_count(total), expected);
    }

    #[test]
    fn last_partial_page() {
        let items: Vec<usize> = (0..25).collect();
        let mut paginator = Paginator::new(10);
        assert!(paginator.next(items.len()));
        assert!(paginator.next(items.len()));
        assert_eq!(paginator.slice(&items), &[20, 21, 22, 23, 24]);
        assert!(!paginator.has_next(items.len()));
        assert!(!paginator.next(items.len()));
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn huge_page_is_empty() {
        let items: Vec<usize> = (0..25).collect();
        let paginator = Paginator::new(10).with_page(usize::MAX / 5);
        assert!(paginator.slice(&items).is_empty());
        assert!(!paginator.has_next(items.len()));
        assert_eq!(
            paginator.info(items.len()),
            PageInfo {
                start: 0,
                end: 25,
                total: 25
            }
        );

        let mut clamped = paginator;
        clamped.go_to(usize::MAX, items.len());
        assert_eq!(clamped.page(), 2);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let mut paginator = Paginator::new(10);
        assert!(!paginator.has_previous());
        assert!(!paginator.previous());
        assert_eq!(paginator.page(), 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let paginator = Paginator::new(10).with_page(1);
        assert!(!paginator.has_next(20));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut paginator = Paginator::new(10).with_page(4);
        paginator.clamp(12);
        assert_eq!(paginator.page(), 1);
        paginator.clamp(0);
        assert_eq!(paginator.page(), 0);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }

    #[test]
    fn info_is_one_based() {
        let paginator = Paginator::new(10).with_page(2);
        assert_eq!(
            paginator.info(25),
            PageInfo {
                start: 21,
                end: 25,
                total: 25
            }
        );
        assert_eq!(paginator.info(25).to_string(), "Showing 21-25 of 25");
        assert_eq!(Paginator::new(10).info(0).start, 0);
    }
}
