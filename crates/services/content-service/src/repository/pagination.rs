//! Page requests and page results for collection queries.

use serde::Serialize;

use domain::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters (1-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Zero-based page index for the paginator
    pub fn index(&self) -> u64 {
        self.page.max(1) - 1
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub docs: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total_docs: u64,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    pub fn new(docs: Vec<T>, request: PageRequest, total_docs: u64) -> Self {
        let page = request.index() + 1;
        let limit = request.limit();

        Self {
            docs,
            page,
            limit,
            total_docs,
            has_next_page: page * limit < total_docs,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_docs.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::new(1, 500).limit(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(1, 0).limit(), 1);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        assert_eq!(PageRequest::new(0, 10).index(), 0);
        assert_eq!(PageRequest::new(3, 10).index(), 2);
    }

    #[test]
    fn test_has_next_page() {
        let first: Page<u8> = Page::new(vec![0; 50], PageRequest::new(1, 50), 120);
        let last: Page<u8> = Page::new(vec![0; 20], PageRequest::new(3, 50), 120);

        assert!(first.has_next_page);
        assert!(!last.has_next_page);
        assert_eq!(first.total_pages(), 3);
    }
}
