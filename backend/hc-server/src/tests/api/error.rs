use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use hc_core::CoreError;
use hc_session::SessionError;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Child 99 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Child 99 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("acceptTerms", "Debes aceptar los términos y condiciones");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "acceptTerms");
}

#[tokio::test]
async fn test_invalid_credentials_session_error_returns_401() {
    let error = ApiError::from(SessionError::invalid_credentials());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(
        json["error"]["message"],
        "Credenciales inválidas. Por favor verifica tus datos."
    );
}

#[tokio::test]
async fn test_storage_session_error_returns_500_without_paths() {
    let error = ApiError::from(SessionError::file_write(
        "/secret/dir/huahuacuna_user.json".into(),
        std::io::Error::other("disk full"),
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("/secret"));
}

#[tokio::test]
async fn test_core_errors_map_to_matching_status() {
    let (status, json) = body_json(CoreError::validation("age", "Todos los campos son requeridos").into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "age");

    let (status, json) = body_json(CoreError::not_found("Application", "42").into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "Application 42 not found");
}
