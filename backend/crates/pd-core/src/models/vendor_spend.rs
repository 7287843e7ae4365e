use serde::{Deserialize, Serialize};

/// Vendor ranked by total spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSpend {
    pub name: String,
    pub spend: String,
    pub category: String,
}
