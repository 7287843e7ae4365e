use pd_core::{Negotiation, PurchaseOrder, Supplier, sample_data};

use axum::Json;

/// GET /api/negotiations
pub async fn list_negotiations() -> Json<Vec<Negotiation>> {
    Json(sample_data::negotiations())
}

/// GET /api/purchase-orders
pub async fn list_purchase_orders() -> Json<Vec<PurchaseOrder>> {
    Json(sample_data::purchase_orders())
}

/// GET /api/suppliers
pub async fn list_suppliers() -> Json<Vec<Supplier>> {
    Json(sample_data::suppliers())
}
