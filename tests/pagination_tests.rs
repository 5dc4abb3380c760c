#[cfg(test)]
pub mod pagination_tests {
    use newsdesk::common::pagination::{DEFAULT_PAGE_SIZE, Page};

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_slice_fills_pages_in_order() {
        let page = Page::slice(items(20), 1, 9);
        assert_eq!(page.items, (0..9).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 20);

        let page = Page::slice(items(20), 2, 9);
        assert_eq!(page.items, (9..18).collect::<Vec<_>>());

        let page = Page::slice(items(20), 3, 9);
        assert_eq!(page.items, (18..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_slice_exact_multiple_has_no_ragged_page() {
        let page = Page::slice(items(18), 2, 9);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 9);
    }

    #[test]
    fn test_requested_page_clamps_at_both_ends() {
        let page = Page::slice(items(20), 0, 9);
        assert_eq!(page.current, 1);
        assert_eq!(page.items.len(), 9);

        let page = Page::slice(items(20), 99, 9);
        assert_eq!(page.current, 3);
        assert_eq!(page.items, (18..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_collection_yields_one_empty_page() {
        let page = Page::slice(items(0), 5, DEFAULT_PAGE_SIZE);
        assert_eq!(page.current, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_controls_disable_at_bounds() {
        let first = Page::slice(items(20), 1, 9);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), 1);
        assert_eq!(first.next(), 2);

        let middle = Page::slice(items(20), 2, 9);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last = Page::slice(items(20), 3, 9);
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.prev(), 2);
        assert_eq!(last.next(), 3);
    }

    #[test]
    fn test_zero_per_page_is_treated_as_one() {
        let page = Page::slice(items(3), 2, 0);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![1]);
    }

    #[test]
    fn test_pager_mirrors_page_state() {
        let page = Page::slice(items(20), 2, 9);
        let pager = page.pager();

        assert_eq!(pager.current, 2);
        assert_eq!(pager.total_pages, 3);
        assert!(pager.has_prev);
        assert!(pager.has_next);
        assert_eq!(pager.prev, 1);
        assert_eq!(pager.next, 3);
    }
}
