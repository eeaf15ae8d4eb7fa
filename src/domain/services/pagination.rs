use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// 1-based page; out-of-range requests are clamped to the nearest valid page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total_pages(total, per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    let slice = if start < total { items[start..end].to_vec() } else { Vec::new() };

    Page {
        items: slice,
        page,
        per_page,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_of_twelve() {
        let items: Vec<u32> = (0..30).collect();
        let first = paginate(&items, 1, 12);
        assert_eq!(first.items, (0..12).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 12);
        assert_eq!(last.items, (24..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&items, 0, 12).page, 1);
        assert_eq!(paginate(&items, 9, 2).page, 3);
        assert_eq!(paginate(&items, 9, 2).items, vec![4]);
    }

    #[test]
    fn test_empty_list() {
        let page = paginate::<u32>(&[], 1, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }
}
