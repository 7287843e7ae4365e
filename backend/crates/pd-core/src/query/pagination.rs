use crate::{DEFAULT_PAGE_LIMIT, FIRST_PAGE, Page, PageMeta};

/// 1-based page window over an ordered sequence.
///
/// Both `page` and `limit` are clamped to at least 1, so `limit = 0`
/// behaves as `limit = 1` and the page count never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Slice `items` down to this page. Pages past the end are empty.
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let data = items
            .into_iter()
            .skip(self.offset())
            .take(self.limit)
            .collect();

        Page {
            data,
            meta: PageMeta {
                total,
                page: self.page,
                limit: self.limit,
                pages: total.div_ceil(self.limit),
            },
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(FIRST_PAGE, DEFAULT_PAGE_LIMIT)
    }
}
