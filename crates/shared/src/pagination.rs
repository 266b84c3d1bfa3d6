//! Page-number pagination utilities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page size for watering history.
pub const DEFAULT_PER_PAGE: i64 = 5;

/// Largest accepted page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Error type for pagination parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page must be at least 1")]
    InvalidPage,
    #[error("per_page must be between 1 and {MAX_PER_PAGE}")]
    InvalidPerPage,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Builds a page request, applying defaults for absent values.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Result<Self, PageError> {
        let page = page.unwrap_or(1);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page < 1 {
            return Err(PageError::InvalidPage);
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(PageError::InvalidPerPage);
        }

        Ok(Self { page, per_page })
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Pagination block returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total = total.max(0);
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            pages: (total + request.per_page - 1) / request.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::new(None, None).unwrap();
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 5);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let req = PageRequest::new(Some(3), Some(10)).unwrap();
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn test_invalid_page() {
        assert_eq!(PageRequest::new(Some(0), None), Err(PageError::InvalidPage));
        assert_eq!(PageRequest::new(Some(-2), None), Err(PageError::InvalidPage));
    }

    #[test]
    fn test_invalid_per_page() {
        assert_eq!(
            PageRequest::new(None, Some(0)),
            Err(PageError::InvalidPerPage)
        );
        assert_eq!(
            PageRequest::new(None, Some(MAX_PER_PAGE + 1)),
            Err(PageError::InvalidPerPage)
        );
        assert!(PageRequest::new(None, Some(MAX_PER_PAGE)).is_ok());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let req = PageRequest::new(Some(1), Some(5)).unwrap();
        assert_eq!(PageInfo::new(req, 0).pages, 0);
        assert_eq!(PageInfo::new(req, 5).pages, 1);
        assert_eq!(PageInfo::new(req, 6).pages, 2);
        assert_eq!(PageInfo::new(req, 11).pages, 3);
    }

    #[test]
    fn test_page_info_serializes() {
        let info = PageInfo::new(PageRequest::default(), 12);
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 1, "per_page": 5, "total": 12, "pages": 3})
        );
    }
}
