//! Pagination stage.

use companies_core::{DirectoryError, DirectoryResult};

/// One page of an ordered sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, borrowed from the ordered input.
    pub items: &'a [T],

    /// Effective 1-based page number after clamping.
    pub page_number: usize,

    /// Page count, never less than one.
    pub total_pages: usize,
}

/// Number of pages for `len` items. An empty sequence still has one page.
///
/// `page_size` must be positive.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Slice out page `page_number`, clamped into `[1, total_pages]`.
///
/// Out-of-range page numbers are clamped rather than rejected. A zero page
/// size is rejected.
pub fn paginate<T>(
    ordered: &[T],
    page_size: usize,
    page_number: usize,
) -> DirectoryResult<Page<'_, T>> {
    if page_size == 0 {
        return Err(DirectoryError::InvalidArgument(
            "page size must be positive".to_string(),
        ));
    }

    let total_pages = total_pages(ordered.len(), page_size);
    let page_number = page_number.clamp(1, total_pages);
    let start = ((page_number - 1) * page_size).min(ordered.len());
    let end = start.saturating_add(page_size).min(ordered.len());

    Ok(Page {
        items: &ordered[start..end],
        page_number,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(12, 6), 2);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (0..10).collect();

        let page = paginate(&items, 6, 1).unwrap();
        assert_eq!(page.items, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(page.total_pages, 2);

        let page = paginate(&items, 6, 2).unwrap();
        assert_eq!(page.items, &[6, 7, 8, 9]);
        assert_eq!(page.page_number, 2);
    }

    #[test]
    fn test_paginate_clamps_page_number() {
        let items: Vec<u32> = (0..10).collect();

        let page = paginate(&items, 6, 7).unwrap();
        assert_eq!(page.page_number, 2);
        assert_eq!(page.items, &[6, 7, 8, 9]);

        let page = paginate(&items, 6, 0).unwrap();
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 9, 3).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_rejects_zero_size() {
        let items = [1, 2, 3];
        let err = paginate(&items, 0, 1).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidArgument(_)));
    }

    #[test]
    fn test_pages_cover_sequence_without_overlap() {
        let items: Vec<u32> = (0..23).collect();
        for size in [1, 4, 6, 9, 12, 23, 50] {
            let total = total_pages(items.len(), size);
            let joined: Vec<u32> = (1..=total)
                .flat_map(|n| paginate(&items, size, n).unwrap().items.to_vec())
                .collect();
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn test_huge_page_size() {
        let items = [1, 2, 3];
        let page = paginate(&items, usize::MAX, 1).unwrap();
        assert_eq!(page.items, &[1, 2, 3]);
        assert_eq!(page.total_pages, 1);
    }
}
