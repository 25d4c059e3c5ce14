//! Client-side paging over the in-memory collection.

use std::cmp::Reverse;

use misiones_core::news::NewsItem;

/// Items per page on the news listing.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Items in the "latest news" side list.
pub const DEFAULT_LATEST_COUNT: usize = 5;

/// Number of pages needed for `len` items.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items `[(page - 1) * page_size, page * page_size)`, 1-based.
///
/// Page 0, a zero page size and pages past the end all yield an empty slice.
#[must_use]
pub fn get_page(items: &[NewsItem], page: usize, page_size: usize) -> &[NewsItem] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return &[];
    };
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The `n` most recently published items, newest first.
///
/// Sorts a copy of the references, leaving the collection order untouched.
/// Items with unparseable dates sort last; ties keep collection order.
#[must_use]
pub fn get_latest(items: &[NewsItem], n: usize) -> Vec<&NewsItem> {
    let mut sorted: Vec<&NewsItem> = items.iter().collect();
    sorted.sort_by_cached_key(|item| Reverse(item.published_at()));
    sorted.truncate(n);
    sorted
}

/// Finds an item by id.
#[must_use]
pub fn find(items: &[NewsItem], id: i64) -> Option<&NewsItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use misiones_test_support::{news_item, numbered_news};

    use super::*;

    fn ids(items: &[NewsItem]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_nine_items_with_page_size_seven() {
        let items = numbered_news(9);

        assert_eq!(ids(get_page(&items, 1, 7)), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ids(get_page(&items, 2, 7)), vec![8, 9]);
        assert!(get_page(&items, 3, 7).is_empty());
        assert_eq!(total_pages(items.len(), 7), 2);
    }

    #[test]
    fn test_pages_concatenate_to_full_collection() {
        for len in [0, 1, 6, 7, 8, 14, 15, 50] {
            for size in [1, 3, 7, 10] {
                let items = numbered_news(len);
                let pages = total_pages(items.len(), size);

                let rebuilt: Vec<NewsItem> = (1..=pages)
                    .flat_map(|p| get_page(&items, p, size).to_vec())
                    .collect();

                assert_eq!(rebuilt, items, "len {len} size {size}");
                assert!(get_page(&items, pages + 1, size).is_empty());
            }
        }
    }

    #[test]
    fn test_degenerate_page_requests_are_empty() {
        let items = numbered_news(5);

        assert!(get_page(&items, 0, 7).is_empty());
        assert!(get_page(&items, 1, 0).is_empty());
        assert!(get_page(&items, usize::MAX, 7).is_empty());
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_latest_sorts_descending_without_mutating_collection() {
        let items = numbered_news(9);

        let latest = get_latest(&items, 5);

        assert_eq!(latest.iter().map(|i| i.id).collect::<Vec<_>>(), vec![9, 8, 7, 6, 5]);
        assert_eq!(ids(get_page(&items, 1, 7)), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_latest_puts_unparseable_dates_last() {
        let items = vec![
            news_item(1, "sin fecha"),
            news_item(2, "2024-05-01"),
            news_item(3, "2025-02-10T08:00:00Z"),
        ];

        let latest = get_latest(&items, 10);

        assert_eq!(latest.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_find_by_id() {
        let items = numbered_news(3);

        assert_eq!(find(&items, 2).unwrap().title, "Noticia 2");
        assert!(find(&items, 42).is_none());
    }
}
