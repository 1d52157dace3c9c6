//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?skip=&limit=`).
///
/// Values are clamped via `restro3d_db::clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Optional `?category=` filter for menu item listings. An empty value means
/// no filter.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

impl CategoryFilter {
    pub fn as_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
