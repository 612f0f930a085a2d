//! Page arithmetic shared by the ledger and chat-stats generators.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalized page request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Half-open index range of this page within `total` items.
    pub fn bounds(&self, total: u64) -> Range<u64> {
        page_bounds(total, self.page, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// `ceil(total / page_size)`; zero page size yields zero pages.
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// `[(page-1)*page_size, min(page*page_size, total))`, empty past the last page.
pub fn page_bounds(total: u64, page: u32, page_size: u32) -> Range<u64> {
    let size = u64::from(page_size);
    let start = u64::from(page.max(1) - 1).saturating_mul(size);
    if start >= total {
        return total..total;
    }
    let end = start.saturating_add(size).min(total);
    start..end
}
