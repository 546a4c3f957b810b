//! Page-number pagination primitives shared by list endpoints.
//!
//! Requests carry a one-based `page` and a bounded `limit`. Responses wrap the
//! selected items together with the total row count so clients can render
//! page controls without a second round trip.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(Some(3), Some(20))?;
//! assert_eq!(request.offset(), 40);
//!
//! let page = Page::new(vec!["a", "b"], 42, request);
//! assert_eq!(page.total_pages(), 3);
//! # Ok::<(), pagination::PageRequestError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Page used when the client does not supply one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the client does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: u32 = 100;

/// Validation failures for page requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The page number was zero or negative.
    #[error("page must be greater than 0 (got {page})")]
    InvalidPage {
        /// Rejected page number.
        page: i64,
    },
    /// The limit fell outside `1..=MAX_LIMIT`.
    #[error("limit must be between 1 and {max} (got {limit})")]
    InvalidLimit {
        /// Rejected limit.
        limit: i64,
        /// Largest accepted limit.
        max: u32,
    },
}

/// Validated page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Validate optional client-supplied values, applying defaults for gaps.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::InvalidPage`] when `page < 1` and
    /// [`PageRequestError::InvalidLimit`] when `limit` is outside
    /// `1..=MAX_LIMIT`.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, PageRequestError> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(raw) => u32::try_from(raw)
                .ok()
                .filter(|value| *value >= 1)
                .ok_or(PageRequestError::InvalidPage { page: raw })?,
        };
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => u32::try_from(raw)
                .ok()
                .filter(|value| (1..=MAX_LIMIT).contains(value))
                .ok_or(PageRequestError::InvalidLimit {
                    limit: raw,
                    max: MAX_LIMIT,
                })?,
        };
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip before the page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of results plus the total number of matching items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in store order.
    pub items: Vec<T>,
    /// Number of items matching the query across all pages.
    pub total: u64,
    /// One-based page number.
    pub page: u32,
    /// Page size used for the query.
    pub limit: u32,
}

impl<T> Page<T> {
    /// Wrap `items` selected with `request`.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Convert every item while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }

    /// Number of pages needed to show `total` items.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit.max(1)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for page request validation.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_when_values_are_missing() {
        let request = PageRequest::new(None, None).expect("defaults are valid");
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn rejects_non_positive_pages(#[case] page: i64) {
        let err = PageRequest::new(Some(page), None).expect_err("page must be rejected");
        assert_eq!(err, PageRequestError::InvalidPage { page });
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    #[case(-1)]
    fn rejects_limits_outside_bounds(#[case] limit: i64) {
        let err = PageRequest::new(None, Some(limit)).expect_err("limit must be rejected");
        assert_eq!(err, PageRequestError::InvalidLimit { limit, max: 100 });
        assert!(err.to_string().contains("between 1 and 100"));
    }

    #[rstest]
    #[case(1, 1, 0)]
    #[case(2, 10, 10)]
    #[case(5, 100, 400)]
    fn offset_skips_previous_pages(#[case] page: i64, #[case] limit: i64, #[case] offset: u64) {
        let request = PageRequest::new(Some(page), Some(limit)).expect("valid request");
        assert_eq!(request.offset(), offset);
    }

    #[rstest]
    fn page_map_preserves_metadata() {
        let request = PageRequest::new(Some(2), Some(2)).expect("valid request");
        let page = Page::new(vec![1, 2], 5, request).map(|value| value * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages(), 3);
    }

    #[rstest]
    fn page_serialises_in_camel_case() {
        let page = Page::new(vec!["x"], 1, PageRequest::default());
        let json = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            json,
            serde_json::json!({ "items": ["x"], "total": 1, "page": 1, "limit": 10 })
        );
    }
}
