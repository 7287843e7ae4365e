//! Filtering for the request listing.

use crate::{FILTER_ALL, Page, Pagination, PurchaseRequest};

/// Listing filters. Filters narrow in a fixed order:
/// status, then department, then free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQuery {
    /// Exact, case-sensitive status match; `all` or empty disables
    pub status: Option<String>,
    /// Exact, case-sensitive department match; `all` or empty disables
    pub department: Option<String>,
    /// Case-insensitive substring over id, title and requester
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl RequestQuery {
    fn status_filter(&self) -> Option<&str> {
        selective(self.status.as_deref())
    }

    fn department_filter(&self) -> Option<&str> {
        selective(self.department.as_deref())
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Filter `records` (in order) and cut out the requested page.
    pub fn apply<'a, I>(&self, records: I) -> Page<PurchaseRequest>
    where
        I: IntoIterator<Item = &'a PurchaseRequest>,
    {
        let mut matched: Vec<&PurchaseRequest> = records.into_iter().collect();

        if let Some(status) = self.status_filter() {
            matched.retain(|r| r.status.as_str() == status);
        }

        if let Some(department) = self.department_filter() {
            matched.retain(|r| r.department.as_deref() == Some(department));
        }

        if let Some(needle) = self.search_needle() {
            matched.retain(|r| r.matches_search(&needle));
        }

        self.pagination
            .paginate(matched.into_iter().cloned().collect())
    }
}

fn selective(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}
