use std::ops::Range;

pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `ceil(total / page_size)`; zero rows means zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Index range of `page` (0-based), clipped to `total`.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// `"Page X of Y"`. An empty table still reads "Page 1 of 1".
pub fn page_label(page: usize, pages: usize) -> String {
    let pages = pages.max(1);
    format!("Page {} of {}", (page + 1).min(pages), pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(0, 5, 7), 0..5);
        assert_eq!(page_bounds(1, 5, 7), 5..7);
        assert_eq!(page_bounds(4, 5, 7), 7..7);
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(0, 2), "Page 1 of 2");
        assert_eq!(page_label(0, 0), "Page 1 of 1");
    }
}
