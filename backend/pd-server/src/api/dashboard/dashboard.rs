//! Dashboard widgets. Everything except the recent-requests panel is
//! fixed demo data.

use crate::AppState;

use pd_core::{
    DashboardSummary, ProcurementMonth, PurchaseRequest, VendorSpend,
    sample_data::{self, RECENT_REQUEST_COUNT},
};

use axum::{Json, extract::State};

/// GET /api/dashboard/summary
pub async fn summary() -> Json<DashboardSummary> {
    Json(sample_data::dashboard_summary())
}

/// GET /api/dashboard/procurement
pub async fn procurement() -> Json<Vec<ProcurementMonth>> {
    Json(sample_data::procurement_history())
}

/// GET /api/dashboard/vendors, GET /api/vendors
pub async fn top_vendors() -> Json<Vec<VendorSpend>> {
    Json(sample_data::top_vendors())
}

/// GET /api/dashboard/requests
///
/// The first few requests in store order.
pub async fn recent_requests(State(state): State<AppState>) -> Json<Vec<PurchaseRequest>> {
    Json(state.store.recent(RECENT_REQUEST_COUNT).await)
}
