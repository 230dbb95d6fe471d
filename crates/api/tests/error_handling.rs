//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use swfav_api::error::AppError;
use swfav_catalog::CatalogError;
use swfav_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn invalid_input_shows_message_with_500() {
    let err = AppError::Core(CoreError::InvalidInput("bad type".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "message": "bad type" }));
}

#[tokio::test]
async fn conflict_shows_message_with_500() {
    let err = AppError::Core(CoreError::Conflict("Favorite exists already!".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Favorite exists already!");
}

#[tokio::test]
async fn storage_failure_is_sanitized() {
    let err = AppError::Core(CoreError::Storage(
        "password authentication failed for user favorites".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Something went wrong.");
    assert!(
        !json.to_string().contains("password"),
        "Storage failures must not leak details"
    );
}

#[tokio::test]
async fn upstream_failures_are_sanitized() {
    let core = AppError::Core(CoreError::Upstream("dns lookup failed".into()));
    let catalog = AppError::from(CatalogError::ApiError {
        status: 503,
        body: "secret upstream body".into(),
    });

    for err in [core, catalog] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "message": "Something went wrong." }));
    }
}

#[test]
fn catalog_error_converts_to_upstream() {
    let err = AppError::from(CatalogError::ApiError {
        status: 404,
        body: "not found".into(),
    });

    assert_matches!(
        err,
        AppError::Core(CoreError::Upstream(msg)) if msg == "Catalog API error (404): not found"
    );
}
