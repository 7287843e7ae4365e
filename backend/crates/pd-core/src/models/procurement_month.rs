use serde::{Deserialize, Serialize};

/// One point of the monthly procurement activity chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementMonth {
    /// Three-letter month name ("Jan")
    pub month: String,
    pub requests: u32,
    pub approved: u32,
    pub rejected: u32,
}
