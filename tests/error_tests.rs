// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitness_frog::error::AppError;

#[test]
fn test_client_errors_map_to_bare_status() {
    let response = AppError::NotFound("Entry 3 not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError::BadRequest("Entry id is required".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_server_errors_map_to_internal_error() {
    let err = AppError::Database("offline".to_string());
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
