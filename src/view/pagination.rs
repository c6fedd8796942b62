//! Client-side pagination of the user table

use crate::error::ConsoleError;
use crate::utils::page_count;
use std::ops::RangeInclusive;

/// Paging state for a list of `len` rows
///
/// `page_count` is derived and must be refreshed through [`Pagination::recompute`]
/// whenever the row count changes; the setters here refresh it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    entry_limit: usize,
    max_size: usize,
    page_count: usize,
    len: usize,
}

impl Pagination {
    pub fn new(entry_limit: usize, max_size: usize) -> Self {
        Self {
            current_page: 1,
            entry_limit: entry_limit.max(1),
            max_size: max_size.max(1),
            page_count: 0,
            len: 0,
        }
    }

    /// 1-based page currently shown
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn entry_limit(&self) -> usize {
        self.entry_limit
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Refresh the page count for a list of `len` rows
    pub fn recompute(&mut self, len: usize) {
        self.len = len;
        self.page_count = page_count(len, self.entry_limit);
        self.current_page = self.current_page.clamp(1, self.page_count.max(1));
    }

    pub fn set_entry_limit(&mut self, limit: usize) -> Result<(), ConsoleError> {
        if limit == 0 {
            return Err(ConsoleError::InvalidEntryLimit { limit });
        }
        self.entry_limit = limit;
        self.recompute(self.len);
        Ok(())
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count.max(1));
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.entry_limit
    }

    /// Rows of `items` that fall on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.entry_limit).min(items.len());
        &items[start..end]
    }

    /// Page buttons to show: at most `max_size`, centred on the current page
    pub fn visible_pages(&self) -> RangeInclusive<usize> {
        if self.page_count == 0 {
            return 1..=0;
        }

        let mut start = self.current_page.saturating_sub(self.max_size / 2).max(1);
        let mut end = start + self.max_size - 1;
        if end > self.page_count {
            end = self.page_count;
            start = (end + 1).saturating_sub(self.max_size).max(1);
        }
        start..=end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10, 5)
    }
}
