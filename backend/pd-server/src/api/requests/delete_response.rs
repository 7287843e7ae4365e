use serde::Serialize;

/// Body returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Request deleted successfully".to_string(),
        }
    }
}
