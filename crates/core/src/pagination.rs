//! Pagination constants and helpers for list endpoints.

/// Default number of news items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of news items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Normalize a requested page number: pages are 1-based.
pub fn normalize_page(page: Option<i64>) -> i64 {
    page.filter(|p| *p >= 1).unwrap_or(1)
}

/// Clamp a requested page size into `[1, MAX_PAGE_SIZE]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .filter(|l| *l >= 1)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page.
///
/// Saturates so that arbitrarily large page numbers yield a huge (but
/// non-negative, non-overflowing) offset instead of wrapping.
pub fn offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Total page count for `total` rows at `limit` rows per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_floors() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page(Some(-5)), 1);
        assert_eq!(normalize_page(Some(3)), 3);
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(25)), 25);
        assert_eq!(clamp_limit(Some(10_000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(3, 25), 50);
    }

    #[test]
    fn test_offset_saturates_on_extreme_page() {
        assert_eq!(offset(i64::MAX, MAX_PAGE_SIZE), i64::MAX);
        assert_eq!(offset(normalize_page(Some(i64::MAX)), clamp_limit(Some(10))), i64::MAX);
        assert!(offset(i64::MAX, 1) >= 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(30, 10), 3);
    }
}
