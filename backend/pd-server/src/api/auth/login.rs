use crate::{ApiError, ApiResult, AppState, LoginRequest, LoginResponse};

use pd_core::sample_data;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /api/auth/login
///
/// Stub login: a single configured account, a fixed token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    if !state
        .auth
        .accepts(req.email.as_deref(), req.password.as_deref())
    {
        return Err(ApiError::invalid_credentials());
    }

    log::info!("Login succeeded for {}", state.auth.email);

    Ok(Json(LoginResponse {
        user: sample_data::demo_user(&state.auth.email),
        token: state.auth.token.clone(),
    }))
}
