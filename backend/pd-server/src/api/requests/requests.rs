//! Purchase request REST API handlers

use crate::{ApiError, ApiResult, AppState, DeleteResponse, ListRequestsQuery};

use pd_core::{NewPurchaseRequest, Page, PurchaseRequest};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Map, Value};

/// GET /api/requests
///
/// Filter by status, department and search text, then paginate.
/// Each parameter is read independently (first value wins), so a repeated
/// or unparseable key never resets the others.
pub async fn list_requests(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Page<PurchaseRequest>> {
    let pairs = match params {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            log::warn!("Ignoring undecodable request listing query: {}", e);
            Vec::new()
        }
    };

    let query = ListRequestsQuery::from_pairs(pairs);

    Json(state.store.list(&query.into_request_query()).await)
}

/// GET /api/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PurchaseRequest>> {
    let request = state
        .store
        .find_by_id(&id)
        .await
        .ok_or_else(ApiError::request_not_found)?;

    Ok(Json(request))
}

/// POST /api/requests
///
/// Create a draft request. Responds 201 with the stored record.
pub async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<NewPurchaseRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PurchaseRequest>)> {
    let Json(payload) = payload?;

    let request = state.store.create(payload).await?;

    log::info!("Created request {} via REST API", request.id);

    Ok((StatusCode::CREATED, Json(request)))
}

/// PUT /api/requests/{id}
///
/// Overwrite the fields of the request that the body names; keys the
/// record does not already have are ignored, as is `id`.
///
/// Values must be JSON strings and `status` one of draft, pending,
/// approved or rejected. Anything else is rejected with 400 and the
/// record is left unchanged.
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<Json<PurchaseRequest>> {
    let Json(patch) = payload?;

    let request = state.store.update(&id, &patch).await?;

    log::info!("Updated request {} via REST API", request.id);

    Ok(Json(request))
}

/// DELETE /api/requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.store.delete(&id).await?;

    log::info!("Deleted request {} via REST API", removed.id);

    Ok(Json(DeleteResponse::deleted()))
}
