//! Query parameter types for API handlers.

use crate::error::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 30;
pub const MAX_PER_PAGE: i64 = 30;

/// Raw pagination parameters (`?page=&per_page=`).
///
/// Kept as strings so a non-numeric value reads as `0` and fails the range
/// check with the usual message instead of a query rejection.
#[derive(Debug, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub per_page: i64,
}

impl PaginationParams {
    /// Collect `page` and `per_page` from decoded query pairs. The first
    /// occurrence of a key wins; other keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Apply defaults and check ranges: `page >= 1`, `1 <= per_page <= 30`.
    pub fn resolve(&self) -> Result<Page, AppError> {
        let page = lenient_int(self.page.as_deref(), DEFAULT_PAGE);
        let per_page = lenient_int(self.per_page.as_deref(), DEFAULT_PER_PAGE);

        if page < 1 {
            return Err(AppError::BadRequest("page must be greater than 0".into()));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(AppError::BadRequest(
                "per_page must be between 1 and 30".into(),
            ));
        }

        Ok(Page { page, per_page })
    }
}

fn lenient_int(raw: Option<&str>, default: i64) -> i64 {
    raw.map_or(default, |s| s.parse().unwrap_or(0))
}
