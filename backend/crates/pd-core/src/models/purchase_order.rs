use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub request_id: String,
    pub supplier: String,
    pub status: String,
    pub created_at: String,
    pub amount: String,
}
