pub mod error;
pub mod models;
pub mod query;
pub mod sample_data;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::dashboard_summary::DashboardSummary;
pub use models::negotiation::Negotiation;
pub use models::new_purchase_request::NewPurchaseRequest;
pub use models::procurement_month::ProcurementMonth;
pub use models::purchase_order::PurchaseOrder;
pub use models::purchase_request::PurchaseRequest;
pub use models::request_status::RequestStatus;
pub use models::supplier::Supplier;
pub use models::user_profile::UserProfile;
pub use models::vendor_spend::VendorSpend;
pub use query::page::{Page, PageMeta};
pub use query::pagination::Pagination;
pub use query::request_query::RequestQuery;

/// Default page size for request listings
pub const DEFAULT_PAGE_LIMIT: usize = 10;
/// First page number (pages are 1-based)
pub const FIRST_PAGE: usize = 1;
/// Sentinel filter value meaning "no filter"
pub const FILTER_ALL: &str = "all";
