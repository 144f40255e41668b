//! Pagination utilities for the service layer
//!
//! Converts raw, possibly missing or malformed query values into a positive
//! `Pagination` window before it reaches the store.

/// Fallback page size when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: usize,
    /// items per page
    pub page_size: usize,
}

impl Pagination {
    /// Parse raw query values. Missing, non-numeric or non-positive values fall
    /// back to page 1 and `default_page_size`.
    pub fn from_query(
        page: Option<&str>,
        page_size: Option<&str>,
        default_page_size: usize,
    ) -> Self {
        let default_page_size = default_page_size.max(1);
        Self {
            page: parse_positive(page).unwrap_or(1),
            page_size: parse_positive(page_size).unwrap_or(default_page_size),
        }
    }

    /// Zero-based start offset; `None` when it does not fit in `usize`.
    pub fn offset(&self) -> Option<usize> {
        self.page.checked_sub(1)?.checked_mul(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, page_size: DEFAULT_PAGE_SIZE } }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    // Negative numbers fail to parse as usize and fall through like "0".
    raw.and_then(|s| s.trim().parse::<usize>().ok()).filter(|n| *n > 0)
}
