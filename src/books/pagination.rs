//! Offset/limit pagination

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// A normalized pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Page {
    /// Builds a page from raw query values: missing or zero values fall
    /// back to the defaults, and the limit is clamped to [`MAX_LIMIT`].
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page = match page {
            Some(0) | None => DEFAULT_PAGE,
            Some(page) => page,
        };
        let limit = match limit {
            Some(0) | None => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };
        Page { page, limit }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(None, None)
    }
}

/// Listing metadata returned alongside paged results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl Metadata {
    pub fn compute(total: u64, page: &Page) -> Self {
        Metadata {
            total,
            page: page.page,
            limit: page.limit,
            total_pages: total.div_ceil(page.limit),
        }
    }
}
