use pd_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}
