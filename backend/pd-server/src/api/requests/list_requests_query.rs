use pd_core::{DEFAULT_PAGE_LIMIT, FIRST_PAGE, Pagination, RequestQuery};

/// Raw query string for GET /api/requests.
///
/// Built from the decoded key/value pairs so that each key is read on its
/// own: the first occurrence of a key wins, later repeats are ignored, and
/// a non-numeric `page` or `limit` falls back to its default without
/// touching the filters.
#[derive(Debug, Default)]
pub struct ListRequestsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub search: Option<String>,
}

impl ListRequestsQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "status" => &mut query.status,
                "department" => &mut query.department,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    pub fn into_request_query(self) -> RequestQuery {
        let page = parse_or(self.page.as_deref(), FIRST_PAGE);
        let limit = parse_or(self.limit.as_deref(), DEFAULT_PAGE_LIMIT);

        RequestQuery {
            status: self.status,
            department: self.department,
            search: self.search,
            pagination: Pagination::new(page, limit),
        }
    }
}

fn parse_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
