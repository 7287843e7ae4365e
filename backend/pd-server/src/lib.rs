pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{login::login, login_request::LoginRequest, login_response::LoginResponse},
    catalog::catalog::{list_negotiations, list_purchase_orders, list_suppliers},
    dashboard::dashboard::{procurement, recent_requests, summary, top_vendors},
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    requests::{
        delete_response::DeleteResponse,
        list_requests_query::ListRequestsQuery,
        requests::{create_request, delete_request, get_request, list_requests, update_request},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
