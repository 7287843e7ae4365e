use crate::{DEFAULT_PAGE_LIMIT, Pagination};

#[test]
fn test_default_pagination() {
    let pagination = Pagination::default();
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.limit(), DEFAULT_PAGE_LIMIT);
}

#[test]
fn test_first_page_of_five_items() {
    let page = Pagination::new(1, 2).paginate(vec![1, 2, 3, 4, 5]);

    assert_eq!(page.data, vec![1, 2]);
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.pages, 3);
}

#[test]
fn test_last_partial_page() {
    let page = Pagination::new(3, 2).paginate(vec![1, 2, 3, 4, 5]);

    assert_eq!(page.data, vec![5]);
    assert_eq!(page.meta.page, 3);
}

#[test]
fn test_page_past_end_is_empty_and_keeps_total() {
    let page = Pagination::new(10, 2).paginate(vec![1, 2, 3, 4, 5]);

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.pages, 3);
}

#[test]
fn test_zero_limit_is_clamped_to_one() {
    let page = Pagination::new(1, 0).paginate(vec!["a", "b", "c"]);

    assert_eq!(page.data, vec!["a"]);
    assert_eq!(page.meta.limit, 1);
    assert_eq!(page.meta.pages, 3);
}

#[test]
fn test_zero_page_is_clamped_to_first() {
    let pagination = Pagination::new(0, 10);
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_empty_input_has_zero_pages() {
    let page = Pagination::default().paginate(Vec::<u8>::new());

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.pages, 0);
}

#[test]
fn test_huge_page_does_not_overflow() {
    let page = Pagination::new(usize::MAX, usize::MAX).paginate(vec![1, 2, 3]);

    assert!(page.data.is_empty());
    assert_eq!(page.meta.pages, 1);
}
