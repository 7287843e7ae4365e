use crate::ListRequestsQuery;

fn query(page: Option<&str>, limit: Option<&str>) -> ListRequestsQuery {
    ListRequestsQuery {
        page: page.map(str::to_string),
        limit: limit.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_missing_page_and_limit_use_defaults() {
    let q = ListRequestsQuery::default().into_request_query();

    assert_eq!(q.pagination.page(), 1);
    assert_eq!(q.pagination.limit(), 10);
}

#[test]
fn test_non_numeric_values_fall_back_to_defaults() {
    let q = query(Some("abc"), Some("-3")).into_request_query();

    assert_eq!(q.pagination.page(), 1);
    assert_eq!(q.pagination.limit(), 10);
}

#[test]
fn test_numeric_values_are_used() {
    let q = query(Some("2"), Some(" 5 ")).into_request_query();

    assert_eq!(q.pagination.page(), 2);
    assert_eq!(q.pagination.limit(), 5);
}

#[test]
fn test_zero_values_are_clamped_to_one() {
    let q = query(Some("0"), Some("0")).into_request_query();

    assert_eq!(q.pagination.page(), 1);
    assert_eq!(q.pagination.limit(), 1);
}

#[test]
fn test_filters_pass_through_unchanged() {
    let q = ListRequestsQuery {
        status: Some("pending".into()),
        department: Some("IT".into()),
        search: Some("Hardware".into()),
        ..Default::default()
    }
    .into_request_query();

    assert_eq!(q.status.as_deref(), Some("pending"));
    assert_eq!(q.department.as_deref(), Some("IT"));
    assert_eq!(q.search.as_deref(), Some("Hardware"));
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_from_pairs_first_value_wins() {
    let q = ListRequestsQuery::from_pairs(pairs(&[
        ("status", "pending"),
        ("page", "1"),
        ("page", "2"),
        ("status", "approved"),
    ]));

    assert_eq!(q.status.as_deref(), Some("pending"));
    assert_eq!(q.page.as_deref(), Some("1"));
}

#[test]
fn test_from_pairs_bad_paging_keeps_filters() {
    let q = ListRequestsQuery::from_pairs(pairs(&[
        ("limit", "many"),
        ("department", "IT"),
        ("search", "soft"),
        ("utm_source", "mail"),
    ]))
    .into_request_query();

    assert_eq!(q.pagination.limit(), 10);
    assert_eq!(q.department.as_deref(), Some("IT"));
    assert_eq!(q.search.as_deref(), Some("soft"));
}
