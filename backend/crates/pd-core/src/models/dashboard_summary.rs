use serde::{Deserialize, Serialize};

/// Headline figures shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_requests: u32,
    pub pending_approval: u32,
    pub total_spent: String,
    pub active_vendors: u32,
}
