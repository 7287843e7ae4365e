use crate::ApiError;

use pd_core::CoreError;
use pd_store::StoreError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_error_body() {
    let (status, json) = body_json(ApiError::request_not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Request not found" }));
}

#[tokio::test]
async fn test_invalid_credentials_returns_401() {
    let (status, json) = body_json(ApiError::invalid_credentials()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_validation_error_returns_400_without_location() {
    let error = ApiError::Validation {
        message: "Missing required field: title".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required field: title");
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_store_not_found_maps_to_request_not_found() {
    let error: ApiError = StoreError::not_found("RFQ-2023-0001").into();

    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    assert!(error.to_string().contains("Request not found"));
}

#[test]
fn test_wrapped_missing_field_keeps_public_message() {
    let error: ApiError = StoreError::from(CoreError::missing_field("amount")).into();

    match error {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "Missing required field: amount");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_wrapped_core_error_maps_to_400() {
    let error: ApiError = StoreError::from(CoreError::invalid_field_value("title")).into();

    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}
