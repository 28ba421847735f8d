#![forbid(unsafe_code)]

//! Page arithmetic and navigation state.
//!
//! The listing endpoints report totals as item counts; pages are derived
//! client-side from a fixed page size. [`Pager`] holds the normalized
//! `(current, total)` pair that Previous/Next controls and the planner
//! both read.

use crate::plan::{PageMarker, plan_clamped};

/// Items per listing page used across QuoteWeave listings.
pub const DEFAULT_PAGE_SIZE: u64 = 9;

/// Number of pages needed to hold `total_items` at `page_size` items per
/// page. A zero `page_size` yields zero pages.
pub fn page_count(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// 0-based item offset of a 1-based page. Saturates instead of wrapping.
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Normalized pagination position.
///
/// `current_page` always lies in `[1, total_pages]`, or both fields are 0
/// when there are no pages. Navigation methods clamp and never panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    current_page: u64,
    total_pages: u64,
}

impl Pager {
    /// Create a pager, clamping `current_page` into `[1, total_pages]`.
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        if total_pages == 0 {
            return Self::default();
        }
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// Create a pager from an item count and page size.
    pub fn from_items(current_page: u64, total_items: u64, page_size: u64) -> Self {
        Self::new(current_page, page_count(total_items, page_size))
    }

    /// The current page (1-based), or 0 when there are no pages.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// The total page count.
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether there are no pages at all.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Whether a Previous control should be shown.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a Next control should be shown.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move to the previous page, stopping at page 1.
    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// Move to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Jump to a page, clamping into `[1, total_pages]`.
    pub fn jump(&mut self, page: u64) {
        if self.total_pages > 0 {
            self.current_page = page.clamp(1, self.total_pages);
        }
    }

    /// 0-based item offset of the current page.
    pub fn offset(&self, page_size: u64) -> u64 {
        page_offset(self.current_page, page_size)
    }

    /// Plan the marker sequence for this position.
    pub fn plan(&self, surrounding: u32) -> Vec<PageMarker> {
        plan_clamped(self.current_page, self.total_pages, surrounding)
    }
}
