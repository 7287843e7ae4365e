pub mod dashboard_summary;
pub mod negotiation;
pub mod new_purchase_request;
pub mod procurement_month;
pub mod purchase_order;
pub mod purchase_request;
pub mod request_status;
pub mod supplier;
pub mod user_profile;
pub mod vendor_spend;
