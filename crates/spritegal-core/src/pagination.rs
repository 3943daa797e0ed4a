#![forbid(unsafe_code)]

//! Fixed-size page partitioning of the sample list.

use core::ops::Range;

/// Splits `len` samples into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    per_page: usize,
}

impl Pager {
    /// `per_page` is clamped to at least 1.
    #[must_use]
    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            len,
            per_page: per_page.max(1),
        }
    }

    /// `ceil(len / per_page)`; zero for an empty gallery.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.per_page)
    }

    #[must_use]
    pub fn contains(&self, page: usize) -> bool {
        page < self.total_pages()
    }

    /// Sample indices shown on `page`; empty when out of range.
    #[must_use]
    pub fn page_range(&self, page: usize) -> Range<usize> {
        if !self.contains(page) {
            return 0..0;
        }
        let start = page * self.per_page;
        start..(start + self.per_page).min(self.len)
    }

    #[must_use]
    pub fn is_first(&self, page: usize) -> bool {
        page == 0
    }

    /// Whether `page` is the last one (true for any page of an empty gallery).
    #[must_use]
    pub fn is_last(&self, page: usize) -> bool {
        page + 1 >= self.total_pages()
    }

    /// CSS transform that shows `page` inside the strip wrapper.
    #[must_use]
    pub fn wrapper_transform(page: usize) -> String {
        format!("translateX(-{}%)", page * 100)
    }
}
