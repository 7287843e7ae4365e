use serde::{Deserialize, Serialize};

/// Price negotiation thread opened with a supplier for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: String,
    pub request_id: String,
    pub supplier: String,
    pub status: String,
    pub created_at: String,
    pub last_message_at: String,
}
