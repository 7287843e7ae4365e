pub mod delete_response;
pub mod list_requests_query;
#[allow(clippy::module_inception)]
pub mod requests;
