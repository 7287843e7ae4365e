pub mod page;
pub mod pagination;
pub mod request_query;
