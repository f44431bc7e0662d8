use crate::post::Post;
use crate::service::FetchFailure;

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;

/// A page request. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        PageRequest { page, limit }
    }

    /// Builds a request from raw query values. Missing, non-numeric or
    /// zero-limit values fall back to the defaults.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(|v| v.parse().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT);
        PageRequest { page, limit }
    }

    /// A zero limit would yield empty pages forever, so it is normalized
    /// back to the default.
    pub fn normalized(self) -> Self {
        if self.limit == 0 {
            PageRequest { page: self.page, limit: DEFAULT_LIMIT }
        } else {
            self
        }
    }
}

/// One page of posts, plus the bookkeeping the list view needs.
///
/// `has_more` is computed from the slice boundary against `total`, not from
/// `data.len()`: a page with per-item load failures can come back shorter
/// than `limit` while `has_more` is still true.
#[derive(Debug)]
pub struct PaginatedPosts {
    pub data: Vec<Post>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
    pub failures: Vec<FetchFailure>,
}

/// Slice boundaries for one page: start is clamped to `total`, end to
/// `start + limit` or `total`, whichever comes first.
pub fn page_bounds(page: u32, limit: u32, total: usize) -> (usize, usize) {
    let start = (page as usize).saturating_mul(limit as usize).min(total);
    let end = start.saturating_add(limit as usize).min(total);
    (start, end)
}
