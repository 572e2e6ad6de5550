use crate::error::{RankingError, Result};
use crate::models::Page;

/// Reject non-positive pagination parameters. Pages are 1-based; values are
/// never silently clamped.
pub fn validate(page: usize, page_size: usize) -> Result<()> {
    if page < 1 || page_size < 1 {
        return Err(RankingError::InvalidPagination { page, page_size });
    }
    Ok(())
}

/// Slice an ordered sequence into one 1-based page.
///
/// `total_pages` is `ceil(total / page_size)` with a minimum of 1, so page 1
/// of an empty result set is valid and empty. Requesting a page past the end
/// returns an empty slice, not an error: "no more results" is a normal
/// terminal state for callers walking pages.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>> {
    validate(page, page_size)?;

    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let start = (page - 1).saturating_mul(page_size);

    let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        items,
        total_count,
        page,
        page_size,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_first_page() {
        let page = paginate(Vec::<i32>::new(), 1, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(items, 3, 10).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_exact_fit_page_count() {
        let items: Vec<i32> = (1..=20).collect();
        let page = paginate(items, 1, 10).unwrap();
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_beyond_end_is_empty_not_error() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paginate(items, 4, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_rejects_zero_page() {
        let err = paginate(vec![1], 0, 10).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RankingError::InvalidPagination { page: 0, page_size: 10 }
        ));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(paginate(vec![1], 1, 0).is_err());
    }

    #[test]
    fn test_concatenated_pages_reproduce_sequence() {
        let items: Vec<i32> = (1..=47).collect();
        let total_pages = paginate(items.clone(), 1, 10).unwrap().total_pages;

        let mut walked = Vec::new();
        for page in 1..=total_pages {
            walked.extend(paginate(items.clone(), page, 10).unwrap().items);
        }
        assert_eq!(walked, items);
    }
}
