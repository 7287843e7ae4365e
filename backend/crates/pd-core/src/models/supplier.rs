use serde::{Deserialize, Serialize};

/// Registered supplier with its average rating (0.0 - 5.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub category: String,
    pub contact_email: String,
    pub rating: f64,
}
