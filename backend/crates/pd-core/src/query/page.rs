use serde::{Deserialize, Serialize};

/// One page of a listing plus the metadata needed to render a pager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Matching items before pagination
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    /// `ceil(total / limit)`
    pub pages: usize,
}
