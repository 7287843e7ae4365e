mod error;
mod list_requests_query;
