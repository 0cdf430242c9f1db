//! Page window arithmetic for search results.
//!
//! The proxy paginates with a zero-based `page` index and a `pageSize`, so the
//! first record of a page sits at offset `page * page_size`. This module keeps
//! that arithmetic in one place: total page count, bounds checks used by page
//! navigation, and the 1-based display range shown to the user.
//!
//! # Example
//!
//! ```ignore
//! use identicole_core::PageWindow;
//!
//! // 25 results, second page, 12 per page
//! let window = PageWindow::new(25, 1, 12);
//!
//! assert_eq!(window.total_pages(), 3);
//! assert_eq!(window.offset(), 12);
//! assert_eq!(window.display_range(12), Some((13, 24)));
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Largest page size the client will ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Position of one page inside a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageWindow {
    /// Total number of matching records across all pages
    pub total: u64,
    /// Zero-based page index
    pub page: u32,
    /// Records per page
    pub page_size: u32,
}

impl PageWindow {
    pub fn new(total: u64, page: u32, page_size: u32) -> Self {
        Self {
            total,
            page,
            page_size,
        }
    }

    /// `ceil(total / page_size)` when there are results, otherwise 0.
    ///
    /// A zero page size yields 0 pages rather than dividing by zero.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 || self.page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Zero-based offset of the first record on the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Whether `page` is a valid index into this result set.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        page < self.total_pages()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.contains(self.page.saturating_add(1))
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// 1-based `(start, end)` of the records shown, given how many records
    /// the current page actually returned. `None` when the page is empty.
    #[must_use]
    pub fn display_range(&self, shown: usize) -> Option<(u64, u64)> {
        if shown == 0 {
            return None;
        }
        let start = self.offset() + 1;
        let end = self.offset() + shown as u64;
        Some((start, end))
    }
}

/// Clamps a requested page size to `[1, MAX_PAGE_SIZE]`.
#[must_use]
pub fn clamp_page_size(size: u32) -> u32 {
    size.clamp(1, MAX_PAGE_SIZE)
}
